use crate::channels::detail::ChannelDetailPage;
use crate::channels::import::ChannelImportPage;
use crate::channels::list::ChannelsPage;
use crate::channels::videos::ChannelVideosPage;
use crate::home::HomePage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/channels")]
    Channels,
    #[at("/channels/import")]
    ChannelImport,
    #[at("/channels/:id")]
    ChannelDetail { id: String },
    #[at("/channels/:id/videos")]
    ChannelVideos { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether this sidebar entry should be highlighted while `current` is shown.
    pub fn is_section_of(&self, current: &Route) -> bool {
        match self {
            Route::Channels => matches!(
                current,
                Route::Channels | Route::ChannelDetail { .. } | Route::ChannelVideos { .. }
            ),
            other => other == current,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Channels => html! { <ChannelsPage /> },
        Route::ChannelImport => html! { <ChannelImportPage /> },
        Route::ChannelDetail { id } => html! { <ChannelDetailPage {id} /> },
        Route::ChannelVideos { id } => html! { <ChannelVideosPage {id} /> },
        Route::NotFound => html! {
            <div class="flex items-center justify-center py-24">
                <div class="bg-white p-8 rounded-2xl shadow-sm border border-gray-100 text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 mb-4">{"404 - ページが見つかりません"}</h1>
                    <Link<Route> to={Route::Home} classes="text-youtube-red hover:underline">
                        {"ダッシュボードに戻る"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
