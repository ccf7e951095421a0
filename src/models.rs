//! Frontend Models
//!
//! Data structures for API records and favorites.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::catalog::Category;

/// One entry of a user's favorites collection.
///
/// `name` doubles as the display label and the removal key. Whatever extra
/// fields the favorited record carried ride along verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub name: String,
    pub id: String,
    /// Source category, when the favoriting view knew it.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One list entry as returned by a list endpoint.
///
/// List responses are not flattened: the nested-envelope upstream keeps its
/// `properties` object nested, and the flat upstream puts its fields at the
/// top level (captured in `extra`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceSummary {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceSummary {
    /// Display label: `name`, else `title`, else a fixed fallback.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("Unknown")
    }

    /// Source identifier: `uid` when present, else the trailing path
    /// segment of `url`.
    pub fn id(&self) -> Option<String> {
        self.uid
            .clone()
            .or_else(|| self.url.as_deref().and_then(crate::api::extract_id))
    }

    /// Look up a display value among the nested properties or the
    /// top-level extra fields.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .or_else(|| self.extra.get(key))
    }

    /// Build the favorite entry for this list row.
    pub fn to_favorite(&self) -> FavoriteItem {
        let mut extra = self.properties.clone().unwrap_or_else(|| self.extra.clone());
        extra.remove("name");
        if let Some(url) = &self.url {
            extra.insert("url".into(), Value::String(url.clone()));
        }
        FavoriteItem {
            name: self.label().to_string(),
            id: self.id().unwrap_or_default(),
            category: None,
            extra,
        }
    }
}

/// A normalized detail record: the envelope's `properties` flattened, with
/// `id` and `url` merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: String,
    pub url: Option<String>,
    pub properties: Map<String, Value>,
}

impl Resource {
    /// Display label: the `name` property, else `title`, else a fixed
    /// fallback.
    pub fn label(&self) -> &str {
        self.properties
            .get("name")
            .or_else(|| self.properties.get("title"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
    }

    /// Build the favorite entry for this record, tagged with its source
    /// category.
    pub fn to_favorite(&self, category: Category) -> FavoriteItem {
        let mut extra = self.properties.clone();
        extra.remove("name");
        if let Some(url) = &self.url {
            extra.insert("url".into(), Value::String(url.clone()));
        }
        FavoriteItem {
            name: self.label().to_string(),
            id: self.id.clone(),
            category: Some(category),
            extra,
        }
    }
}
