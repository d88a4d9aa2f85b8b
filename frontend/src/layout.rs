use crate::router::Route;
use analytics::query::ChannelListParams;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn nav_items() -> Vec<(&'static str, Route)> {
    vec![
        ("ダッシュボード", Route::Home),
        ("チャンネル一覧", Route::Channels),
        ("チャンネル登録", Route::ChannelImport),
    ]
}

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub app_name: String,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigator = use_navigator();
    let search_input = use_state(String::new);

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            search_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    // Header search jumps to the channel list with the query in the URL
    let on_search_submit = {
        let search_input = search_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                let params = ChannelListParams::search(&search_input);
                if let Err(err) = navigator.push_with_query(&Route::Channels, &params) {
                    log::error!("Failed to open channel search: {err}");
                }
            }
        })
    };

    html! {
        <div class="min-h-screen bg-dashboard-surface text-gray-900">
            <header class="sticky top-0 z-30 border-b border-gray-200 bg-white/95 backdrop-blur">
                <div class="mx-auto flex max-w-6xl items-center gap-4 px-4 py-4 sm:px-6">
                    <div class="flex items-center gap-3">
                        <span class="flex h-9 w-9 items-center justify-center rounded-full bg-youtube-red text-base font-semibold text-white">
                            {"YA"}
                        </span>
                        <div>
                            <p class="text-sm font-semibold tracking-tight text-gray-900">{&props.app_name}</p>
                            <p class="text-xs text-gray-500">{"ダッシュボード"}</p>
                        </div>
                    </div>
                    <form onsubmit={on_search_submit} class="hidden flex-1 items-center md:flex">
                        <input
                            type="text"
                            placeholder="チャンネルを検索"
                            value={(*search_input).clone()}
                            oninput={on_search_input}
                            class="w-full rounded-full border border-gray-200 bg-gray-50 px-4 py-2 text-sm text-gray-700 placeholder:text-gray-400 focus:border-youtube-red focus:outline-none focus:ring-2 focus:ring-youtube-red/20"
                        />
                    </form>
                </div>
            </header>

            <div class="mx-auto flex max-w-6xl gap-6 px-4 py-8 sm:px-6">
                <aside class="hidden w-56 shrink-0 flex-col gap-1 text-sm text-gray-600 lg:flex">
                    {
                        for nav_items().into_iter().map(|(label, route)| {
                            let link_class = if route.is_section_of(&current) {
                                "flex items-center rounded-r-full px-4 py-2 transition border-l-4 border-youtube-red bg-white font-semibold text-gray-900 shadow-sm"
                            } else {
                                "flex items-center rounded-r-full px-4 py-2 transition border-l-4 border-transparent hover:bg-white"
                            };
                            html! {
                                <Link<Route> to={route} classes={classes!(link_class)}>{label}</Link<Route>>
                            }
                        })
                    }
                </aside>

                <main class="flex-1">{props.children.clone()}</main>
            </div>
        </div>
    }
}
