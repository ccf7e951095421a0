//! Resource Fetching & Normalization
//!
//! List and detail requests for every category, dispatching on the
//! catalog's envelope shape, plus the pure normalization helpers.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::catalog::{Category, EnvelopeShape};
use super::{get_json, FetchError};
use crate::models::{Resource, ResourceSummary};

/// Characters reserved in a query-string value.
const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>').add(b'&').add(b'+');

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    results: Vec<ResourceSummary>,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    result: Option<DetailRecord>,
}

#[derive(Debug, Deserialize)]
struct DetailRecord {
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    properties: Map<String, Value>,
}

/// Fetch one page of results for a category.
///
/// The `results` array is returned verbatim; list entries keep their own
/// nested `properties`. An empty `results` is an empty list, not an error.
pub async fn fetch_list(category: Category) -> Result<Vec<ResourceSummary>, FetchError> {
    let url = format!("{}/{}/", category.api_base(), category.api_segment());
    let envelope: ListEnvelope = get_json(&url).await?;
    Ok(envelope.results)
}

/// Fetch and normalize a single record.
///
/// For the nested upstream `id` is the numeric uid; for the flat upstream
/// it is the slugged record name, resolved through a search query.
pub async fn fetch_one(category: Category, id: &str) -> Result<Resource, FetchError> {
    match category.envelope() {
        EnvelopeShape::Nested => fetch_nested(category, id).await,
        EnvelopeShape::Flat => fetch_by_search(category, id).await,
    }
}

async fn fetch_nested(category: Category, id: &str) -> Result<Resource, FetchError> {
    let url = format!("{}/{}/{}/", category.api_base(), category.api_segment(), id);
    let envelope: DetailEnvelope = get_json(&url).await?;
    let record = envelope.result.ok_or(FetchError::BadEnvelope)?;
    Ok(normalize_record(record, id))
}

async fn fetch_by_search(category: Category, slug: &str) -> Result<Resource, FetchError> {
    let name = unslug(slug);
    let url = format!(
        "{}/{}/?search={}",
        category.api_base(),
        category.api_segment(),
        utf8_percent_encode(&name, QUERY)
    );
    let envelope: ListEnvelope = get_json(&url).await?;
    select_search_hit(envelope.results, category, &name, slug)
}

/// Resolve a search-by-name response: the first hit wins, an empty result
/// set is a not-found error.
fn select_search_hit(
    results: Vec<ResourceSummary>,
    category: Category,
    name: &str,
    slug: &str,
) -> Result<Resource, FetchError> {
    let hit = results
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NotFound(format!("{} \"{}\"", category.noun(), name)))?;
    Ok(flatten_summary(hit, slug))
}

/// Flatten a nested detail envelope: `properties` to the top level, `id`
/// falling back to the requested id when the envelope carries no `uid`.
fn normalize_record(record: DetailRecord, fallback_id: &str) -> Resource {
    Resource {
        id: record.uid.unwrap_or_else(|| fallback_id.to_string()),
        url: record.url,
        properties: record.properties,
    }
}

/// Turn a flat list entry into a detail record. The flat upstream has no
/// `uid`; the id comes from the record URL, else the requested slug.
fn flatten_summary(summary: ResourceSummary, fallback_id: &str) -> Resource {
    let id = summary
        .id()
        .unwrap_or_else(|| fallback_id.to_string());
    let mut properties = match summary.properties {
        Some(props) => props,
        None => summary.extra,
    };
    if let Some(name) = summary.name {
        properties.insert("name".into(), Value::String(name));
    }
    if let Some(title) = summary.title {
        properties.entry("title").or_insert(Value::String(title));
    }
    Resource {
        id,
        url: summary.url,
        properties,
    }
}

/// Trailing path segment of a record URL: `".../people/5/"` yields `"5"`.
pub fn extract_id(url: &str) -> Option<String> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}

/// Route-safe slug for name-addressed records: `"Sand Crawler"` becomes
/// `"sand-crawler"`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Inverse of [`slugify`] up to the original casing.
pub fn unslug(slug: &str) -> String {
    slug.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_envelope_flattens_to_top_level() {
        let envelope: DetailEnvelope = serde_json::from_value(json!({
            "result": {
                "uid": "1",
                "url": "u",
                "properties": {"name": "Luke Skywalker", "height": "172"}
            }
        }))
        .unwrap();
        let resource = normalize_record(envelope.result.unwrap(), "1");

        assert_eq!(resource.id, "1");
        assert_eq!(resource.url.as_deref(), Some("u"));
        assert_eq!(resource.properties["name"], "Luke Skywalker");
        assert_eq!(resource.properties["height"], "172");
        assert_eq!(resource.label(), "Luke Skywalker");
    }

    #[test]
    fn missing_uid_falls_back_to_requested_id() {
        let record: DetailRecord = serde_json::from_value(json!({
            "url": "u",
            "properties": {"name": "Tatooine"}
        }))
        .unwrap();
        assert_eq!(normalize_record(record, "7").id, "7");
    }

    #[test]
    fn envelope_without_result_is_an_error_value() {
        let envelope: DetailEnvelope = serde_json::from_value(json!({"message": "ok"})).unwrap();
        let outcome = envelope.result.ok_or(FetchError::BadEnvelope);
        assert_eq!(outcome.unwrap_err(), FetchError::BadEnvelope);
    }

    #[test]
    fn empty_results_decode_to_an_empty_list() {
        let envelope: ListEnvelope = serde_json::from_value(json!({"results": []})).unwrap();
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn list_entries_keep_nested_properties() {
        let envelope: ListEnvelope = serde_json::from_value(json!({
            "results": [
                {"uid": "1", "name": "Luke Skywalker", "url": ".../people/1/"},
                {"name": "Leia Organa", "url": "https://www.swapi.tech/api/people/5/",
                 "properties": {"height": "150"}}
            ]
        }))
        .unwrap();
        assert_eq!(envelope.results.len(), 2);
        assert_eq!(envelope.results[0].id().as_deref(), Some("1"));
        // uid absent: id derived from the trailing URL segment
        assert_eq!(envelope.results[1].id().as_deref(), Some("5"));
        assert_eq!(
            envelope.results[1].field("height").and_then(|v| v.as_str()),
            Some("150")
        );
    }

    #[test]
    fn flat_records_flatten_with_name_reinserted() {
        let summary: ResourceSummary = serde_json::from_value(json!({
            "name": "Sand Crawler",
            "model": "Digger Crawler",
            "vehicle_class": "wheeled",
            "url": "https://swapi.dev/api/vehicles/4/"
        }))
        .unwrap();
        let resource = flatten_summary(summary, "sand-crawler");

        assert_eq!(resource.id, "4");
        assert_eq!(resource.properties["name"], "Sand Crawler");
        assert_eq!(resource.properties["model"], "Digger Crawler");
    }

    #[test]
    fn empty_search_results_are_a_not_found_error() {
        let outcome = select_search_hit(Vec::new(), Category::Vehicles, "sand crawler", "sand-crawler");
        assert_eq!(
            outcome.unwrap_err(),
            FetchError::NotFound("vehicle \"sand crawler\"".to_string())
        );
    }

    #[test]
    fn the_first_search_hit_wins() {
        let envelope: ListEnvelope = serde_json::from_value(json!({
            "results": [
                {"name": "Snowspeeder", "url": "https://swapi.dev/api/vehicles/14/"},
                {"name": "Snowspeeder Mk II", "url": "https://swapi.dev/api/vehicles/15/"}
            ]
        }))
        .unwrap();

        let resource =
            select_search_hit(envelope.results, Category::Vehicles, "snowspeeder", "snowspeeder")
                .unwrap();

        assert_eq!(resource.id, "14");
        assert_eq!(resource.properties["name"], "Snowspeeder");
    }

    #[test]
    fn id_extraction_takes_the_trailing_segment() {
        assert_eq!(extract_id(".../people/5/").as_deref(), Some("5"));
        assert_eq!(
            extract_id("https://swapi.dev/api/vehicles/14/").as_deref(),
            Some("14")
        );
        assert_eq!(extract_id(""), None);
    }

    #[test]
    fn slugs_round_trip_names() {
        assert_eq!(slugify("Sand Crawler"), "sand-crawler");
        assert_eq!(unslug("sand-crawler"), "sand crawler");
    }
}
