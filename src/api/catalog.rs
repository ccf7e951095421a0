//! Category Catalog
//!
//! The configuration table mapping each browsable category to its upstream
//! service, envelope shape, routes, images, and card fields. Pages never
//! hard-code per-category URLs; they ask the catalog.

use serde::{Deserialize, Serialize};

/// Nested-envelope upstream (characters, planets, species, starships).
const SWAPI_TECH: &str = "https://www.swapi.tech/api";
/// Flat-shape upstream (vehicles).
const SWAPI_DEV: &str = "https://swapi.dev/api";
/// Image CDN, addressed by category slug and numeric id.
const VISUAL_GUIDE: &str = "https://starwars-visualguide.com/assets/img";
const PLACEHOLDER: &str = "https://via.placeholder.com";

/// How an upstream wraps its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// Details come as `{"result": {uid, url, properties: {...}}}` and are
    /// fetched by numeric id.
    Nested,
    /// Records are flat objects; details resolve by `?search=<name>` with
    /// the first hit winning.
    Flat,
}

/// One of the five browsable resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Characters,
    Planets,
    Species,
    Starships,
    Vehicles,
}

/// All categories, in home-page display order.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Planets,
    Category::Starships,
    Category::Characters,
    Category::Species,
    Category::Vehicles,
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Planets => "Planets",
            Category::Species => "Species",
            Category::Starships => "Starships",
            Category::Vehicles => "Vehicles",
        }
    }

    /// Singular noun for loading/error copy.
    pub fn noun(self) -> &'static str {
        match self {
            Category::Characters => "character",
            Category::Planets => "planet",
            Category::Species => "species",
            Category::Starships => "starship",
            Category::Vehicles => "vehicle",
        }
    }

    pub fn route_path(self) -> &'static str {
        match self {
            Category::Characters => "/characters",
            Category::Planets => "/planets",
            Category::Species => "/species",
            Category::Starships => "/starships",
            Category::Vehicles => "/vehicles",
        }
    }

    pub fn api_base(self) -> &'static str {
        match self.envelope() {
            EnvelopeShape::Nested => SWAPI_TECH,
            EnvelopeShape::Flat => SWAPI_DEV,
        }
    }

    /// Path segment on the upstream service. Note characters live under
    /// `people`.
    pub fn api_segment(self) -> &'static str {
        match self {
            Category::Characters => "people",
            Category::Planets => "planets",
            Category::Species => "species",
            Category::Starships => "starships",
            Category::Vehicles => "vehicles",
        }
    }

    pub fn envelope(self) -> EnvelopeShape {
        match self {
            Category::Vehicles => EnvelopeShape::Flat,
            _ => EnvelopeShape::Nested,
        }
    }

    /// Image CDN slug; characters use their own name here, unlike the API
    /// segment.
    fn image_segment(self) -> &'static str {
        match self {
            Category::Characters => "characters",
            other => other.api_segment(),
        }
    }

    pub fn image_url(self, id: &str) -> String {
        format!("{}/{}/{}.jpg", VISUAL_GUIDE, self.image_segment(), id)
    }

    /// Placeholder substituted when the CDN has no image.
    pub fn placeholder_url(self) -> String {
        let size = match self {
            Category::Characters => "300x400",
            Category::Planets | Category::Species => "300x300",
            Category::Starships | Category::Vehicles => "400x200",
        };
        format!("{}/{}?text=Image+Not+Available", PLACEHOLDER, size)
    }

    /// Short description for the home-page grid and list headers.
    pub fn blurb(self) -> &'static str {
        match self {
            Category::Characters => "Meet heroes, villains, and everything in between.",
            Category::Planets => "Travel across the galaxy to the many planets.",
            Category::Species => "Explore the galaxy's diverse species.",
            Category::Starships => "Discover the iconic starships of Star Wars.",
            Category::Vehicles => "Discover the legendary vehicles of the Star Wars universe.",
        }
    }

    /// Which record fields the list cards surface, with their labels and
    /// unit suffixes.
    pub fn summary_fields(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Category::Characters => &[
                ("height", "Height", " cm"),
                ("mass", "Mass", " kg"),
                ("birth_year", "Birth Year", ""),
            ],
            Category::Planets => &[
                ("climate", "Climate", ""),
                ("terrain", "Terrain", ""),
                ("population", "Population", ""),
            ],
            Category::Species => &[
                ("classification", "Classification", ""),
                ("language", "Language", ""),
                ("average_lifespan", "Average Lifespan", " years"),
            ],
            Category::Starships => &[
                ("model", "Model", ""),
                ("manufacturer", "Manufacturer", ""),
                ("cost_in_credits", "Cost", " credits"),
            ],
            Category::Vehicles => &[
                ("model", "Model", ""),
                ("vehicle_class", "Class", ""),
                ("manufacturer", "Manufacturer", ""),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_map_to_people_on_the_nested_upstream() {
        assert_eq!(Category::Characters.api_segment(), "people");
        assert_eq!(Category::Characters.envelope(), EnvelopeShape::Nested);
        assert!(Category::Characters.api_base().contains("swapi.tech"));
    }

    #[test]
    fn vehicles_use_the_flat_upstream() {
        assert_eq!(Category::Vehicles.envelope(), EnvelopeShape::Flat);
        assert!(Category::Vehicles.api_base().contains("swapi.dev"));
    }

    #[test]
    fn image_urls_are_addressed_by_slug_and_id() {
        assert_eq!(
            Category::Characters.image_url("5"),
            "https://starwars-visualguide.com/assets/img/characters/5.jpg"
        );
        assert_eq!(
            Category::Starships.image_url("9"),
            "https://starwars-visualguide.com/assets/img/starships/9.jpg"
        );
    }

    #[test]
    fn placeholders_carry_the_not_available_text() {
        assert_eq!(
            Category::Characters.placeholder_url(),
            "https://via.placeholder.com/300x400?text=Image+Not+Available"
        );
    }
}
