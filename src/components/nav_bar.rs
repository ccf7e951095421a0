//! Navigation Bar Component
//!
//! Top bar with category links and the favorites panel.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::catalog::ALL_CATEGORIES;
use crate::models::FavoriteItem;
use crate::store::{store_remove_favorite, use_favorites, FavoritesStateStoreFields};

/// Row key for the favorites panel. Position alone is not enough: after a
/// removal the survivors shift down and a position-keyed row would keep
/// its old children. Pairing the position with the name makes any shifted
/// row rebuild, while duplicates of one name stay distinct rows.
fn row_key(index: usize, favorite: &FavoriteItem) -> (usize, String) {
    (index, favorite.name.clone())
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_favorites();
    let (panel_open, set_panel_open) = signal(false);
    let favorite_rows = move || store.favorites().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <A href="/">
                <span class="brand">"HOLOCRON"</span>
            </A>
            {ALL_CATEGORIES
                .iter()
                .map(|category| {
                    view! { <A href=category.route_path()>{category.label()}</A> }
                })
                .collect_view()}
            <button
                class="btn favorites-toggle"
                on:click=move |_| set_panel_open.update(|open| *open = !*open)
            >
                {move || format!("Favorites ({})", store.favorites().read().len())}
            </button>
            <Show when=move || panel_open.get()>
                <div class="favorites-panel">
                    <Show when=move || store.favorites().read().is_empty()>
                        <p>"No favorites yet."</p>
                    </Show>
                    <ul>
                        <For
                            each=favorite_rows
                            key=|(index, favorite)| row_key(*index, favorite)
                            children=move |(_, favorite)| {
                                let name = favorite.name.clone();
                                view! {
                                    <li>
                                        <span>{favorite.name.clone()}</span>
                                        <button
                                            class="remove-btn"
                                            on:click=move |_| store_remove_favorite(&store, &name)
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </nav>
    }
}
