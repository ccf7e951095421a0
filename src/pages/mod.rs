//! Pages
//!
//! Routed views. The list and detail pages are generic over the category;
//! the router instantiates them per route.

mod home;
mod not_found;
mod resource_detail;
mod resource_list;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use resource_detail::ResourceDetailPage;
pub use resource_list::ResourceListPage;
