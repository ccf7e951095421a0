//! Holocron Frontend App
//!
//! Root component: provides the favorites store and wires the routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::catalog::Category;
use crate::components::NavBar;
use crate::pages::{HomePage, NotFoundPage, ResourceDetailPage, ResourceListPage};
use crate::store::{FavoritesState, FavoritesStore};

#[component]
pub fn App() -> impl IntoView {
    // Favorites live for the whole session; every page sees the same store.
    provide_context::<FavoritesStore>(Store::new(FavoritesState::default()));

    view! {
        <Router>
            <NavBar/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route
                        path=path!("/characters")
                        view=|| view! { <ResourceListPage category=Category::Characters/> }
                    />
                    <Route
                        path=path!("/planets")
                        view=|| view! { <ResourceListPage category=Category::Planets/> }
                    />
                    <Route
                        path=path!("/species")
                        view=|| view! { <ResourceListPage category=Category::Species/> }
                    />
                    <Route
                        path=path!("/starships")
                        view=|| view! { <ResourceListPage category=Category::Starships/> }
                    />
                    <Route
                        path=path!("/vehicles")
                        view=|| view! { <ResourceListPage category=Category::Vehicles/> }
                    />
                    <Route
                        path=path!("/characters/:id")
                        view=|| view! { <ResourceDetailPage category=Category::Characters/> }
                    />
                    <Route
                        path=path!("/planets/:id")
                        view=|| view! { <ResourceDetailPage category=Category::Planets/> }
                    />
                    <Route
                        path=path!("/species/:id")
                        view=|| view! { <ResourceDetailPage category=Category::Species/> }
                    />
                    <Route
                        path=path!("/starships/:id")
                        view=|| view! { <ResourceDetailPage category=Category::Starships/> }
                    />
                    <Route
                        path=path!("/vehicles/:id")
                        view=|| view! { <ResourceDetailPage category=Category::Vehicles/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
