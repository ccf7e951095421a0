//! Resource Detail Page
//!
//! Generic detail view: fetches one record for the `:id` route param,
//! renders every property, and offers add-to-favorites.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{self, catalog::Category};
use crate::components::{ErrorNotice, FallbackImage};
use crate::display::{format_key, format_value, HIDDEN_KEYS};
use crate::loader::{use_remote, RemoteState};
use crate::models::Resource;
use crate::store::{store_add_favorite, use_favorites};

#[component]
pub fn ResourceDetailPage(category: Category) -> impl IntoView {
    let params = use_params_map();
    let handle = use_remote(
        move || params.read().get("id").unwrap_or_default(),
        move |id: String| async move { api::fetch_one(category, &id).await },
    );

    view! {
        <div class="detail-page">
            {move || match handle.state.get() {
                RemoteState::Idle | RemoteState::Loading => {
                    view! {
                        <div class="loading">
                            <p>{format!("Loading {} details...", category.noun())}</p>
                        </div>
                    }
                        .into_any()
                }
                RemoteState::Failed(message) => {
                    view! {
                        <ErrorNotice
                            title=format!("Error loading {} details", category.noun())
                            message=message
                            on_retry=Callback::new(move |_| handle.reload())
                        />
                    }
                        .into_any()
                }
                RemoteState::Ready(resource) => {
                    view! { <DetailCard category=category resource=resource/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DetailCard(category: Category, resource: Resource) -> impl IntoView {
    let store = use_favorites();
    let label = resource.label().to_string();

    let rows = resource
        .properties
        .iter()
        .filter(|(key, _)| !HIDDEN_KEYS.contains(&key.as_str()))
        .map(|(key, value)| {
            view! {
                <p>
                    <span class="detail-label">{format_key(key)} ": "</span>
                    {format_value(value)}
                </p>
            }
        })
        .collect_view();

    let favorite = resource.to_favorite(category);

    view! {
        <div class="detail-card">
            <FallbackImage
                src=category.image_url(&resource.id)
                alt=label.clone()
                fallback=category.placeholder_url()
            />
            <h2>{label.clone()}</h2>
            {rows}
            <button class="btn" on:click=move |_| store_add_favorite(&store, favorite.clone())>
                "Add to Favorites"
            </button>
        </div>
    }
}
