//! Flattening of values into lowercase search text, and query tokenization

use serde::Serialize;
use serde_json::{Number, Value};

/// Flatten a value into a single lowercase, space-joined string
///
/// Strings are lowercased, numbers and booleans use their textual form,
/// `null` becomes empty, and sequences and records join the normalized form
/// of their elements (record keys are ignored, values follow insertion
/// order).
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::query::normalize_item_value;
/// use serde_json::json;
///
/// let item = json!({"name": "Alice", "tags": ["Admin", true], "score": 12.5, "bio": null});
/// assert_eq!(normalize_item_value(&item), "alice admin true 12.5 ");
/// # }
/// ```
pub fn normalize_item_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_lowercase(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number).to_lowercase(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(normalize_item_value).collect::<Vec<_>>().join(" "),
        Value::Object(map) => map.values().map(normalize_item_value).collect::<Vec<_>>().join(" "),
    }
}

/// Normalize any serializable item
///
/// Items that cannot be viewed as JSON normalize to an empty string, so
/// they never match a non-empty query.
pub fn normalize_item<T: Serialize + ?Sized>(item: &T) -> String {
    serde_json::to_value(item).map(|value| normalize_item_value(&value)).unwrap_or_default()
}

// Whole floats below 1e21 print as plain digits without a trailing `.0`.
// `Display` for f64 uses the shortest round-trip digits padded with zeros, so
// large values read `123456789012345680000`, not their exact binary expansion.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64() && float.is_finite() && float.fract() == 0.0 && float.abs() < 1e21 =>
        {
            format!("{float}")
        }
        _ => number.to_string(),
    }
}

/// Split a raw query into lowercase tokens
///
/// Only the space character separates tokens; the empty fragments produced
/// by repeated, leading or trailing spaces are dropped. Duplicates are kept
/// in query order.
pub fn build_normalized_query_tokens(query: &str) -> Vec<String> {
    query.to_lowercase().split(' ').filter(|token| !token.is_empty()).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    //! Unit tests for query::normalize.
    use serde_json::json;

    use super::*;

    /// Validates `normalize_item_value` for each value kind.
    ///
    /// Assertions:
    /// - Ensures primitives render as lowercase text and null as empty.
    /// - Ensures containers join their children with single spaces.
    #[test]
    fn test_normalize_primitives_and_containers() {
        assert_eq!(normalize_item_value(&json!("HeLLo")), "hello");
        assert_eq!(normalize_item_value(&json!(true)), "true");
        assert_eq!(normalize_item_value(&json!(123_456.85)), "123456.85");
        assert_eq!(normalize_item_value(&json!(-7)), "-7");
        assert_eq!(normalize_item_value(&json!(3.0)), "3");
        assert_eq!(normalize_item_value(&json!(null)), "");
        assert_eq!(normalize_item_value(&json!(["A", ["B", 1]])), "a b 1");
        assert_eq!(normalize_item_value(&json!([])), "");
        assert_eq!(normalize_item_value(&json!({})), "");
    }

    /// Validates large whole floats use their shortest digits.
    ///
    /// Assertions:
    /// - Ensures values past 2^53 pad the shortest digits with zeros.
    /// - Ensures values from 1e21 keep exponent notation.
    #[test]
    fn test_normalize_large_whole_floats() {
        assert_eq!(normalize_item_value(&json!(1.2345678901234568e20)), "123456789012345680000");
        assert_eq!(normalize_item_value(&json!(9.007199254740993e15)), "9007199254740992");
        assert_eq!(normalize_item_value(&json!(1e20)), "100000000000000000000");
        assert_eq!(normalize_item_value(&json!(1e21)), "1e21");
    }

    /// Validates records contribute values in insertion order, never keys.
    #[test]
    fn test_normalize_record_uses_values_in_insertion_order() {
        let item = json!({"zeta": "Last", "alpha": "First", "Key": {"nested": "DEEP"}});
        assert_eq!(normalize_item_value(&item), "last first deep");
    }

    /// Validates typed items and items that cannot become JSON.
    #[test]
    fn test_normalize_item_typed() {
        #[derive(Serialize)]
        struct User {
            name: &'static str,
            active: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            nickname: Option<&'static str>,
        }

        let user = User { name: "Ada Lovelace", active: false, nickname: None };
        assert_eq!(normalize_item(&user), "ada lovelace false");

        let mut unrepresentable = std::collections::HashMap::new();
        unrepresentable.insert(vec![1], 1);
        assert_eq!(normalize_item(&unrepresentable), "");
    }

    /// Validates `build_normalized_query_tokens` splitting.
    ///
    /// Assertions:
    /// - Ensures blank queries produce no tokens.
    /// - Ensures only spaces separate tokens and duplicates are kept.
    #[test]
    fn test_build_normalized_query_tokens() {
        assert!(build_normalized_query_tokens("").is_empty());
        assert!(build_normalized_query_tokens("    ").is_empty());
        assert_eq!(build_normalized_query_tokens("  a   b "), vec!["a", "b"]);
        assert_eq!(build_normalized_query_tokens("Foo foo"), vec!["foo", "foo"]);
        assert_eq!(build_normalized_query_tokens("tab\tsep"), vec!["tab\tsep"]);
    }
}
