//! Not Found Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"Have you heard the tragedy of Darth Plagueis the Wise?"</p>
            <A href="/">"Back to the archive"</A>
        </div>
    }
}
