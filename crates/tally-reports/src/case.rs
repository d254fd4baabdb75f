//! Outbound key-case normalization.
//!
//! The backend speaks snake_case. Rust field names already are, so this
//! pass is usually the identity, but it is applied once at the
//! request-building boundary so any camel-cased key reaching the wire is
//! normalized and the convention stays testable in one place.

use serde_json::{Map, Value};

/// Converts a camelCase identifier to snake_case.
///
/// Keys that already are snake_case come back unchanged.
fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }

    out
}

/// Rewrites every object key in `value` to snake_case, recursively.
///
/// Scalars and array structure are left untouched; only keys change.
pub fn snakecase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), snakecase_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snakecase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_keys_are_rewritten() {
        assert_eq!(to_snake_case("asyncQuery"), "async_query");
        assert_eq!(to_snake_case("fromTimestamp"), "from_timestamp");
    }

    #[test]
    fn test_snake_case_keys_are_untouched() {
        assert_eq!(to_snake_case("directory_path"), "directory_path");
        assert_eq!(to_snake_case("limit"), "limit");
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let transformed = snakecase_keys(json!({
            "fromTimestamp": 1,
            "nested": {"directoryPath": "/tmp", "alreadySnake": [{"innerKey": true}]}
        }));

        assert_eq!(
            transformed,
            json!({
                "from_timestamp": 1,
                "nested": {"directory_path": "/tmp", "already_snake": [{"inner_key": true}]}
            })
        );
    }

    #[test]
    fn test_scalar_values_are_not_rewritten() {
        let transformed = snakecase_keys(json!({"key": "camelCaseValue"}));
        assert_eq!(transformed, json!({"key": "camelCaseValue"}));
    }
}
