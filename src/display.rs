//! Presentation Formatting
//!
//! Helpers for turning raw record fields into display text.

use serde_json::Value;

/// Record fields never shown in a detail property list.
pub const HIDDEN_KEYS: &[&str] = &["created", "edited", "url", "id", "name", "title"];

/// `"hair_color"` becomes `"Hair Color"`.
pub fn format_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scalar values render as-is, arrays join with commas, anything absent or
/// empty renders as "N/A".
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => "N/A".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "N/A".to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_become_title_case() {
        assert_eq!(format_key("hair_color"), "Hair Color");
        assert_eq!(format_key("height"), "Height");
        assert_eq!(format_key("max_atmosphering_speed"), "Max Atmosphering Speed");
    }

    #[test]
    fn arrays_join_and_blanks_fall_back() {
        assert_eq!(format_value(&json!(["a", "b"])), "a, b");
        assert_eq!(format_value(&json!("")), "N/A");
        assert_eq!(format_value(&json!(null)), "N/A");
        assert_eq!(format_value(&json!("172")), "172");
        assert_eq!(format_value(&json!(42)), "42");
    }
}
