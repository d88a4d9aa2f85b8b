use analytics::format::ChannelMetric;
use analytics::pagination::Pagination;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

// Helper to read "value" from any event target without HtmlSelectElement.
pub fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="mb-4 rounded-xl border border-red-200 bg-red-50 p-4">
                <p class="text-sm text-red-600">{ msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub message: AttrValue,
}

/// Centered grey line used for loading and empty states.
#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    html! {
        <div class="py-12 text-center">
            <p class="text-sm text-gray-500">{ props.message.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub pagination: Pagination,
    pub on_page_change: Callback<u64>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let pagination = props.pagination;
    if !pagination.is_visible() {
        return html! {};
    }

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(pagination.previous().current_page))
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(pagination.next().current_page))
    };

    let button_class = "rounded-xl border border-gray-200 px-4 py-2 text-sm font-semibold text-gray-700 transition hover:border-youtube-red hover:text-youtube-red disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="mt-6 flex items-center justify-center gap-2">
            <button onclick={on_previous} disabled={!pagination.has_previous()} class={button_class}>
                {"前へ"}
            </button>
            <span class="text-sm text-gray-600">
                { format!("{} / {}", pagination.current_page, pagination.total_pages()) }
            </span>
            <button onclick={on_next} disabled={!pagination.has_next()} class={button_class}>
                {"次へ"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub metric: ChannelMetric,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let metric = &props.metric;
    html! {
        <article class="rounded-2xl border border-gray-100 bg-white p-5 shadow-sm">
            <p class="text-xs font-medium uppercase tracking-wide text-gray-500">{ metric.label }</p>
            <p class="mt-3 text-2xl font-semibold text-gray-900">{ &metric.value }</p>
            if metric.has_delta() {
                <p class="mt-1 text-xs font-semibold text-emerald-500">{ &metric.delta }</p>
            }
        </article>
    }
}
