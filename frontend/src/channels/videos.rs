use crate::api::use_api_client;
use crate::channels::parse_channel_id;
use crate::components::{event_value, ErrorMessage, PaginationControls, StatusMessage};
use crate::fetch_guard::FetchGuard;
use crate::router::Route;
use analytics::format::VideoRow;
use analytics::pagination::{Pagination, ITEMS_PER_PAGE};
use analytics::query::{VideoFilter, VideoSort};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_CLASS: &str = "mt-2 w-full rounded-2xl border border-gray-200 px-3 py-3 text-sm text-gray-700 focus:border-youtube-red focus:outline-none focus:ring-2 focus:ring-youtube-red/20";
const LABEL_CLASS: &str = "text-xs font-semibold uppercase tracking-wide text-gray-500";

#[derive(Properties, PartialEq)]
pub struct ChannelVideosPageProps {
    pub id: String,
}

#[function_component(ChannelVideosPage)]
pub fn channel_videos_page(props: &ChannelVideosPageProps) -> Html {
    let client = use_api_client();
    let channel_id = parse_channel_id(&props.id);

    let videos = use_state(Vec::<VideoRow>::new);
    let total_count = use_state(|| 0u64);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let filter = use_state(VideoFilter::default);
    let current_page = use_state(|| 1u64);

    {
        let videos = videos.clone();
        let total_count = total_count.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(
            (channel_id.clone(), (*filter).clone(), *current_page),
            move |(channel_id, filter, page)| {
                let guard = FetchGuard::new();
                match channel_id {
                    Ok(channel_id) => {
                        let channel_id = *channel_id;
                        let offset = Pagination::new(ITEMS_PER_PAGE).at_page(*page).offset();
                        let query = filter.to_query(ITEMS_PER_PAGE, offset);
                        loading.set(true);
                        error_message.set(None);

                        let in_flight = guard.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = client.get_channel_videos(channel_id, &query).await;
                            if !in_flight.is_current() {
                                return;
                            }
                            match result {
                                Ok(response) => {
                                    videos.set(response.items.iter().map(VideoRow::from).collect());
                                    total_count.set(response.total_count);
                                }
                                Err(e) => {
                                    log::error!("Failed to load videos for channel {channel_id}: {e}");
                                    videos.set(Vec::new());
                                    total_count.set(0);
                                    error_message.set(Some(e.to_string()));
                                }
                            }
                            loading.set(false);
                        });
                    }
                    Err(message) => {
                        videos.set(Vec::new());
                        total_count.set(0);
                        error_message.set(Some(message.clone()));
                        loading.set(false);
                    }
                }
                move || guard.cancel()
            },
        );
    }

    // Any filter change starts over from the first page
    let update_filter = {
        let filter = filter.clone();
        let current_page = current_page.clone();
        move |apply: fn(&mut VideoFilter, String)| {
            let filter = filter.clone();
            let current_page = current_page.clone();
            move |value: String| {
                let mut next = (*filter).clone();
                apply(&mut next, value);
                filter.set(next);
                current_page.set(1);
            }
        }
    };

    let on_sort_change = {
        let set_sort = update_filter(|f, value| {
            if let Some(sort) = VideoSort::from_key(&value) {
                f.sort = sort;
            }
        });
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                set_sort(value);
            }
        })
    };

    let on_from_change = {
        let set_from = update_filter(|f, value| f.from = value);
        Callback::from(move |e: Event| set_from(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_to_change = {
        let set_to = update_filter(|f, value| f.to = value);
        Callback::from(move |e: Event| set_to(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_min_views_change = {
        let set_min_views = update_filter(|f, value| f.min_views = value);
        Callback::from(move |e: Event| {
            set_min_views(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_page_change = {
        let current_page = current_page.clone();
        Callback::from(move |page: u64| current_page.set(page))
    };

    let pagination = Pagination::new(ITEMS_PER_PAGE)
        .with_total(*total_count)
        .at_page(*current_page);

    html! {
        <div class="space-y-8">
            <header class="space-y-3">
                <p class="text-sm uppercase tracking-wide text-gray-500">{ format!("channels / {} / videos", props.id) }</p>
                <h1 class="text-2xl font-semibold text-gray-900">{"動画一覧"}</h1>
                <p class="text-sm text-gray-500">{ format!("{} 本の動画", *total_count) }</p>
                <div class="flex flex-wrap gap-3">
                    <Link<Route> to={Route::ChannelDetail { id: props.id.clone() }} classes="btn-glass">
                        {"チャンネル詳細に戻る"}
                    </Link<Route>>
                    <Link<Route> to={Route::Channels} classes="btn-glass">
                        {"一覧へ戻る"}
                    </Link<Route>>
                </div>
            </header>

            <section class="modern-card">
                <div class="card-inner">
                    <div class="grid gap-8 grid-cols-1 md:grid-cols-2">
                        <div>
                            <label class={LABEL_CLASS}>{"並び替え"}</label>
                            <select onchange={on_sort_change} class={INPUT_CLASS}>
                                {
                                    for VideoSort::all_variants().into_iter().map(|sort| html! {
                                        <option value={sort.key()} selected={sort == filter.sort}>
                                            { sort.display_name() }
                                        </option>
                                    })
                                }
                            </select>
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"期間フィルター"}</label>
                            <div class="flex gap-3">
                                <input type="date" value={filter.from.clone()} onchange={on_from_change} class={INPUT_CLASS} />
                                <input type="date" value={filter.to.clone()} onchange={on_to_change} class={INPUT_CLASS} />
                            </div>
                        </div>
                        <div>
                            <label class={LABEL_CLASS}>{"最低再生数"}</label>
                            <input
                                type="number"
                                min="0"
                                value={filter.min_views.clone()}
                                onchange={on_min_views_change}
                                placeholder="例: 1000"
                                class={INPUT_CLASS}
                            />
                        </div>
                    </div>
                </div>
            </section>

            <section class="modern-card">
                <div class="card-inner">
                    <ErrorMessage error_message={(*error_message).clone()} />
                    {
                        if *loading {
                            html! { <StatusMessage message="読み込み中..." /> }
                        } else if videos.is_empty() {
                            if error_message.is_some() {
                                html! {}
                            } else {
                                html! { <StatusMessage message="動画がありません" /> }
                            }
                        } else {
                            html! {
                                <>
                                    <div class="grid gap-8 grid-cols-1 md:grid-cols-2">
                                        { for videos.iter().map(|video| html! { <VideoCard video={video.clone()} /> }) }
                                    </div>
                                    <PaginationControls {pagination} {on_page_change} />
                                </>
                            }
                        }
                    }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: VideoRow,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let stats = [
        ("公開日", &video.published_at),
        ("再生数", &video.views),
        ("高評価", &video.likes),
        ("コメント", &video.comments),
        ("尺", &video.duration),
    ];

    html! {
        <div class="channel-card">
            <div class="channel-inner">
                if let Some(thumbnail) = &video.thumbnail_url {
                    <img src={thumbnail.clone()} alt={video.title.clone()} class="mb-3 w-full rounded-xl" loading="lazy" />
                }
                <a href={video.watch_url.clone()} target="_blank" class="channel-title hover:text-youtube-red">
                    { &video.title }
                </a>
                <p class="text-xs text-gray-500 mb-2">{ format!("ID: {}", video.id) }</p>
                <div class="channel-stats">
                    {
                        for stats.iter().map(|(label, value)| html! {
                            <div class="channel-stat">
                                <span>{ format!("{label}: ") }<strong>{ (*value).clone() }</strong></span>
                            </div>
                        })
                    }
                </div>
            </div>
        </div>
    }
}
