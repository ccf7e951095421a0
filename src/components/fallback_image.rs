//! Fallback Image Component
//!
//! Image that swaps to a placeholder when the CDN has nothing for it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Image with a one-shot error fallback. Swapping at most once keeps a
/// failing placeholder from looping the error handler.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    fallback: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            class=class
            loading="lazy"
            on:error=move |ev| {
                let target = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok());
                if let Some(img) = target {
                    if img.src() != fallback {
                        img.set_src(&fallback);
                    }
                }
            }
        />
    }
}
