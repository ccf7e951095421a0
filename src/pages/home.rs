//! Home Page
//!
//! Landing page with the category grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::catalog::ALL_CATEGORIES;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home-header">
                <h1 class="star-wars-title">"STAR WARS"</h1>
                <h2 class="subtitle">"A New Perspective on the Galaxy Far, Far Away"</h2>
            </header>
            <div class="sections-grid">
                {ALL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="section-card">
                                <h3>{category.label().to_uppercase()}</h3>
                                <p>{category.blurb()}</p>
                                <A href=category.route_path()>
                                    {format!("Explore {}", category.label())}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
