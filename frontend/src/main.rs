mod api;
mod channels;
mod charts;
mod components;
mod env_variable_utils;
mod fetch_guard;
mod home;
mod layout;
mod logger;
mod router;

use crate::api::ApiClient;
use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::layout::AppLayout;
use crate::router::{switch, Route};
use analytics::ApiConfig;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| ApiClient::new(ApiConfig::new(API_BASE_URL.as_str())));

    html! {
        <BrowserRouter>
            <ContextProvider<ApiClient> context={(*client).clone()}>
                <AppLayout app_name={get_app_name()}>
                    <Switch<Route> render={switch} />
                </AppLayout>
            </ContextProvider<ApiClient>>
        </BrowserRouter>
    }
}

fn main() {
    logger::init_logger(is_debug_mode());

    yew::Renderer::<App>::new().render();

    info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        *API_BASE_URL,
        is_debug_mode()
    );
}
