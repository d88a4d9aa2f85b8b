use crate::api::use_api_client;
use crate::components::{ErrorMessage, PaginationControls, StatusMessage};
use crate::fetch_guard::FetchGuard;
use crate::router::Route;
use analytics::format::ChannelRow;
use analytics::pagination::{Pagination, ITEMS_PER_PAGE};
use analytics::query::ChannelListParams;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ChannelsPage)]
pub fn channels_page() -> Html {
    let client = use_api_client();
    let navigator = use_navigator();
    // Search text and page live in the URL so the header search can drive this page
    let params = use_location()
        .and_then(|location| location.query::<ChannelListParams>().ok())
        .unwrap_or_default();

    let channels = use_state(Vec::<ChannelRow>::new);
    let total_count = use_state(|| 0u64);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let search_input = use_state(|| params.search_text().to_string());

    {
        let channels = channels.clone();
        let total_count = total_count.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with(params.clone(), move |params| {
            let query = params.to_query(ITEMS_PER_PAGE);
            let guard = FetchGuard::new();
            loading.set(true);
            error_message.set(None);

            let in_flight = guard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.get_channels(&query).await;
                if !in_flight.is_current() {
                    return;
                }
                match result {
                    Ok(response) => {
                        channels.set(response.items.iter().map(ChannelRow::from).collect());
                        total_count.set(response.total_count);
                    }
                    Err(e) => {
                        log::error!("Failed to load channels: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            move || guard.cancel()
        });
    }

    {
        let search_input = search_input.clone();
        use_effect_with(params.q.clone(), move |q| {
            search_input.set(q.clone().unwrap_or_default());
            || ()
        });
    }

    let push_params = {
        let navigator = navigator.clone();
        move |next: ChannelListParams| {
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&Route::Channels, &next) {
                    log::error!("Failed to update channel list URL: {err}");
                }
            }
        }
    };

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            search_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_search_submit = {
        let search_input = search_input.clone();
        let push_params = push_params.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            push_params(ChannelListParams::search(&search_input));
        })
    };

    let on_page_change = {
        let params = params.clone();
        Callback::from(move |page: u64| push_params(params.with_page(page)))
    };

    let pagination = Pagination::new(ITEMS_PER_PAGE)
        .with_total(*total_count)
        .at_page(params.page());

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-semibold text-gray-900">{"チャンネル一覧"}</h1>
                <p class="mt-2 text-sm text-gray-500">{ format!("合計 {} 件のチャンネル", *total_count) }</p>
            </div>

            <div class="rounded-2xl border border-gray-100 bg-white p-6 shadow-sm">
                <form onsubmit={on_search_submit} class="mb-4">
                    <input
                        type="text"
                        value={(*search_input).clone()}
                        oninput={on_search_input}
                        placeholder="チャンネルを検索"
                        class="w-full rounded-xl border border-gray-200 bg-white px-4 py-3 text-sm text-gray-900 placeholder:text-gray-400 focus:border-youtube-red focus:outline-none focus:ring-2 focus:ring-youtube-red/20"
                    />
                </form>

                <ErrorMessage error_message={(*error_message).clone()} />

                {
                    if *loading {
                        html! { <StatusMessage message="読み込み中..." /> }
                    } else if channels.is_empty() {
                        html! { <StatusMessage message="チャンネルが見つかりませんでした" /> }
                    } else {
                        html! {
                            <>
                                <ChannelTable channels={(*channels).clone()} />
                                <PaginationControls {pagination} {on_page_change} />
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChannelTableProps {
    channels: Vec<ChannelRow>,
}

#[function_component(ChannelTable)]
fn channel_table(props: &ChannelTableProps) -> Html {
    let header_class = "px-4 py-3 text-left text-xs font-semibold uppercase tracking-wide text-gray-500";
    let cell_class = "px-4 py-4 text-sm text-gray-600";

    html! {
        <div class="overflow-x-auto">
            <table class="w-full">
                <thead>
                    <tr class="border-b border-gray-200">
                        <th class={header_class}>{"タイトル"}</th>
                        <th class={header_class}>{"登録者数"}</th>
                        <th class={header_class}>{"総再生数"}</th>
                        <th class={header_class}>{"動画数"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for props.channels.iter().map(|channel| html! {
                            <tr key={channel.id.to_string()} class="border-b border-gray-100 transition hover:bg-gray-50">
                                <td class="px-4 py-4">
                                    <Link<Route>
                                        to={Route::ChannelDetail { id: channel.id.to_string() }}
                                        classes="font-semibold text-gray-900 hover:text-youtube-red"
                                    >
                                        { &channel.name }
                                    </Link<Route>>
                                </td>
                                <td class={cell_class}>{ &channel.subscribers }</td>
                                <td class={cell_class}>{ &channel.total_views }</td>
                                <td class={cell_class}>{ &channel.videos }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
