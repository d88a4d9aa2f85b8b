use crate::api::use_api_client;
use crate::components::ErrorMessage;
use crate::router::Route;
use analytics::channel_ref::ChannelReference;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ChannelImportPage)]
pub fn channel_import_page() -> Html {
    let client = use_api_client();
    let navigator = use_navigator();

    let input = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let hint = ChannelReference::parse(&input).ok().map(|reference| reference.hint());

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let input = input.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if let Err(err) = ChannelReference::parse(&input) {
                error_message.set(Some(err.to_string()));
                return;
            }

            let value = input.trim().to_string();
            let client = client.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match client.import_channel(&value).await {
                    Ok(response) => {
                        log::info!(
                            "Imported channel {} ({})",
                            response.channel.title,
                            response.channel.id
                        );
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::ChannelDetail {
                                id: response.channel.id.to_string(),
                            });
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to import channel {value}: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-semibold text-gray-900">{"チャンネル登録"}</h1>
                <p class="mt-2 text-sm text-gray-500">
                    {"YouTubeチャンネルのURL、ハンドル（@name）またはチャンネルIDを入力してください。"}
                </p>
            </div>

            <div class="rounded-2xl border border-gray-100 bg-white p-6 shadow-sm">
                <form onsubmit={on_submit} class="space-y-4">
                    <label class="text-xs font-semibold uppercase tracking-wide text-gray-500">
                        {"チャンネルURLまたはID"}
                    </label>
                    <input
                        type="text"
                        value={(*input).clone()}
                        oninput={on_input}
                        disabled={*loading}
                        placeholder="https://www.youtube.com/@example"
                        class="w-full rounded-xl border border-gray-200 bg-white px-4 py-3 text-sm text-gray-900 placeholder:text-gray-400 focus:border-youtube-red focus:outline-none focus:ring-2 focus:ring-youtube-red/20"
                    />
                    if let Some(hint) = hint {
                        <p class="text-xs text-gray-500">{ hint }</p>
                    }

                    <ErrorMessage error_message={(*error_message).clone()} />

                    <button
                        type="submit"
                        disabled={*loading}
                        class="inline-flex items-center justify-center rounded-full bg-youtube-red px-5 py-2 text-sm font-semibold text-white transition hover:bg-red-600 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { if *loading { "登録中..." } else { "登録する" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
