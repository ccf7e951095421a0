//! Error Notice Component
//!
//! In-place failure message with a manual retry affordance.

use leptos::prelude::*;

/// Rendered instead of content when a fetch settles in the failed state.
#[component]
pub fn ErrorNotice(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-notice">
            <h4>{title}</h4>
            <p>{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
