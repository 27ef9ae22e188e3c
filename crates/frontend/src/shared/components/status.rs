use crate::shared::api_error::ApiError;
use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(optional)] height_px: Option<u32>) -> impl IntoView {
    let style = height_px.map(|h| format!("height: {}px;", h));
    view! {
        <div class="loading" style=style>
            <span class="loading__spinner"></span>
            <span>"Loading..."</span>
        </div>
    }
}

/// Banner for a failed fetch; the view keeps rendering whatever data it still has.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            }
        })
    }
}
