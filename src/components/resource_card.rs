//! Resource Card Component
//!
//! One list entry: image, link to the detail page, the category's summary
//! fields, and the add-to-favorites button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::catalog::{Category, EnvelopeShape};
use crate::api::slugify;
use crate::display::format_value;
use crate::models::ResourceSummary;
use crate::store::{store_add_favorite, use_favorites};

use super::FallbackImage;

#[component]
pub fn ResourceCard(category: Category, summary: ResourceSummary) -> impl IntoView {
    let store = use_favorites();
    let id = summary.id().unwrap_or_default();
    let label = summary.label().to_string();

    // Nested-upstream records are addressed by uid; flat ones by slugged
    // name, since their upstream has no fetch-by-id.
    let detail_param = match category.envelope() {
        EnvelopeShape::Nested => id.clone(),
        EnvelopeShape::Flat => slugify(&label),
    };
    let href = format!("{}/{}", category.route_path(), detail_param);

    let lines: Vec<String> = category
        .summary_fields()
        .iter()
        .filter_map(|(key, text, suffix)| {
            summary
                .field(key)
                .map(|value| format!("{}: {}{}", text, format_value(value), suffix))
        })
        .collect();

    let favorite = summary.to_favorite();

    view! {
        <li class="resource-card">
            <FallbackImage
                src=category.image_url(&id)
                alt=label.clone()
                fallback=category.placeholder_url()
            />
            <h3>
                <A href=href>{label.clone()}</A>
            </h3>
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            <button class="btn" on:click=move |_| store_add_favorite(&store, favorite.clone())>
                "Add to Favorites"
            </button>
        </li>
    }
}
