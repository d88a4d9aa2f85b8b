use crate::api::use_api_client;
use crate::channels::parse_channel_id;
use crate::charts::{MonthlyViewsChart, TopVideosChart};
use crate::components::{ErrorMessage, MetricCard, StatusMessage};
use crate::fetch_guard::FetchGuard;
use crate::router::Route;
use analytics::format::{channel_metrics, format_short_date};
use analytics::models::{ChannelImportResponse, Video, VideoListResponse};
use analytics::query::{VideoQuery, VideoSort};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Most recent uploads fetched to feed the charts.
const CHART_VIDEO_LIMIT: u64 = 500;

/// Everything the detail page shows for one channel id.
#[derive(Debug, Clone, PartialEq)]
struct ChannelLoad {
    detail: Option<ChannelImportResponse>,
    videos: Vec<Video>,
    total_videos: u64,
    loading: bool,
    error_message: Option<String>,
}

impl Default for ChannelLoad {
    fn default() -> Self {
        Self {
            detail: None,
            videos: Vec::new(),
            total_videos: 0,
            loading: true,
            error_message: None,
        }
    }
}

enum ChannelLoadAction {
    Start,
    Channel(ChannelImportResponse),
    Videos(VideoListResponse),
    ChannelFailed(String),
    VideosFailed(String),
}

impl Reducible for ChannelLoad {
    type Action = ChannelLoadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Nothing from a previously shown channel survives a new load
            ChannelLoadAction::Start => next = ChannelLoad::default(),
            ChannelLoadAction::Channel(response) => next.detail = Some(response),
            ChannelLoadAction::Videos(response) => {
                next.total_videos = response.total_count;
                next.videos = response.items;
                next.loading = false;
            }
            ChannelLoadAction::ChannelFailed(message) => {
                next.detail = None;
                next.videos.clear();
                next.total_videos = 0;
                next.error_message = Some(message);
                next.loading = false;
            }
            ChannelLoadAction::VideosFailed(message) => {
                next.error_message = Some(message);
                next.loading = false;
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelDetailPageProps {
    pub id: String,
}

#[function_component(ChannelDetailPage)]
pub fn channel_detail_page(props: &ChannelDetailPageProps) -> Html {
    let client = use_api_client();
    let channel_id = parse_channel_id(&props.id);
    let state = use_reducer(ChannelLoad::default);

    {
        let state = state.clone();

        use_effect_with(channel_id.clone(), move |channel_id| {
            let guard = FetchGuard::new();
            state.dispatch(ChannelLoadAction::Start);

            match channel_id {
                Ok(channel_id) => {
                    let channel_id = *channel_id;
                    let in_flight = guard.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let channel = client.get_channel(channel_id).await;
                        if !in_flight.is_current() {
                            return;
                        }
                        match channel {
                            Ok(response) => state.dispatch(ChannelLoadAction::Channel(response)),
                            Err(e) => {
                                log::error!("Failed to load channel {channel_id}: {e}");
                                state.dispatch(ChannelLoadAction::ChannelFailed(e.to_string()));
                                return;
                            }
                        }

                        let query = VideoQuery {
                            sort: Some(VideoSort::DateDesc),
                            limit: Some(CHART_VIDEO_LIMIT),
                            ..Default::default()
                        };
                        let channel_videos = client.get_channel_videos(channel_id, &query).await;
                        if !in_flight.is_current() {
                            return;
                        }
                        match channel_videos {
                            Ok(response) => state.dispatch(ChannelLoadAction::Videos(response)),
                            Err(e) => {
                                log::warn!("Failed to load videos for channel {channel_id}: {e}");
                                state.dispatch(ChannelLoadAction::VideosFailed(e.to_string()));
                            }
                        }
                    });
                }
                Err(message) => state.dispatch(ChannelLoadAction::ChannelFailed(message.clone())),
            }
            move || guard.cancel()
        });
    }

    let detail = &state.detail;
    let videos = &state.videos;
    let channel_name = detail
        .as_ref()
        .map(|d| d.channel.title.clone())
        .unwrap_or_else(|| format!("Channel: {}", props.id));

    html! {
        <div class="space-y-8">
            <header class="space-y-3">
                <p class="text-sm uppercase tracking-wide text-gray-500">{ format!("channels / {}", props.id) }</p>
                <h1 class="text-2xl font-semibold text-gray-900">{ channel_name }</h1>
                {
                    if let Some(detail) = detail {
                        html! {
                            <p class="text-sm text-gray-500">
                                { format!("最終取得: {}", format_short_date(Some(&detail.summary.last_fetched_at))) }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="flex flex-wrap gap-3">
                    <Link<Route>
                        to={Route::ChannelVideos { id: props.id.clone() }}
                        classes="inline-flex items-center justify-center rounded-full bg-youtube-red px-5 py-2 text-sm font-semibold text-white transition hover:bg-red-600"
                    >
                        {"動画一覧を開く"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Channels}
                        classes="inline-flex items-center justify-center rounded-full border border-gray-200 px-5 py-2 text-sm font-semibold text-gray-700 transition hover:border-youtube-red hover:text-youtube-red"
                    >
                        {"チャンネル一覧に戻る"}
                    </Link<Route>>
                </div>
            </header>

            <ErrorMessage error_message={state.error_message.clone()} />

            {
                if state.loading {
                    html! { <StatusMessage message="読み込み中..." /> }
                } else if let Some(detail) = detail {
                    html! {
                        <>
                            <section class="grid gap-4 lg:grid-cols-3">
                                {
                                    for channel_metrics(&detail.channel).into_iter().map(|metric| html! {
                                        <MetricCard {metric} />
                                    })
                                }
                            </section>
                            <ChartSection
                                title="月別再生数"
                                note={sample_note(videos.len(), state.total_videos)}
                            >
                                <MonthlyViewsChart videos={videos.clone()} />
                            </ChartSection>
                            <ChartSection title="再生数トップ10">
                                <TopVideosChart videos={videos.clone()} />
                            </ChartSection>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn sample_note(loaded: usize, total: u64) -> Option<String> {
    (total > loaded as u64).then(|| format!("直近 {loaded} 本の動画（全 {total} 本）から集計しています"))
}

#[derive(Properties, PartialEq)]
struct ChartSectionProps {
    title: AttrValue,
    #[prop_or_default]
    note: Option<String>,
    children: Html,
}

#[function_component(ChartSection)]
fn chart_section(props: &ChartSectionProps) -> Html {
    html! {
        <section class="rounded-2xl border border-gray-100 bg-white p-6 shadow-sm">
            <h2 class="text-lg font-semibold text-gray-900">{ props.title.clone() }</h2>
            if let Some(note) = &props.note {
                <p class="text-sm text-gray-500">{ note }</p>
            }
            <div class="mt-6">{ props.children.clone() }</div>
        </section>
    }
}
