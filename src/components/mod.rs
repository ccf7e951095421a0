//! UI Components
//!
//! Reusable Leptos components.

mod error_notice;
mod fallback_image;
mod nav_bar;
mod resource_card;

pub use error_notice::ErrorNotice;
pub use fallback_image::FallbackImage;
pub use nav_bar::NavBar;
pub use resource_card::ResourceCard;
