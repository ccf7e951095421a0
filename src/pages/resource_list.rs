//! Resource List Page
//!
//! One page of a category's records, rendered as cards.

use leptos::prelude::*;

use crate::api::{self, catalog::Category};
use crate::components::{ErrorNotice, ResourceCard};
use crate::loader::{use_remote, RemoteState};

#[component]
pub fn ResourceListPage(category: Category) -> impl IntoView {
    let handle = use_remote(
        move || category,
        move |category: Category| async move { api::fetch_list(category).await },
    );

    view! {
        <div class="resource-list-page">
            <h1>{category.label()}</h1>
            <p>{category.blurb()}</p>
            {move || match handle.state.get() {
                RemoteState::Idle | RemoteState::Loading => {
                    view! {
                        <div class="loading">
                            <p>{format!("Loading {}...", category.label().to_lowercase())}</p>
                        </div>
                    }
                        .into_any()
                }
                RemoteState::Failed(message) => {
                    view! {
                        <ErrorNotice
                            title=format!("Error loading {}", category.label().to_lowercase())
                            message=message
                            on_retry=Callback::new(move |_| handle.reload())
                        />
                    }
                        .into_any()
                }
                RemoteState::Ready(results) if results.is_empty() => {
                    view! { <p>"Nothing here. These are not the records you are looking for."</p> }
                        .into_any()
                }
                RemoteState::Ready(results) => {
                    view! {
                        <ul class="resource-list">
                            {results
                                .into_iter()
                                .map(|summary| {
                                    view! { <ResourceCard category=category summary=summary/> }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
