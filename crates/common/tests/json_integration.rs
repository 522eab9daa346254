//! Integration tests for the JSON guard rails and the canonical encoder
//!
//! Exercises the public `transform` API with typed records the way callers
//! hash or compare payloads: struct field order, map key order and optional
//! fields must not leak into the canonical text.

#![allow(clippy::doc_lazy_continuation)]

use std::collections::{BTreeMap, HashMap};

use primkit_common::transform::{
    create_deep_clone, parse_json, parse_json_as, stringify_json,
    stringify_json_deterministically,
};
use primkit_common::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Invoice {
    number: u32,
    customer: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    note: Option<String>,
    lines: Vec<Line>,
    tags: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Line {
    sku: String,
    quantity: u32,
    price: f64,
}

/// Mirror of [`Invoice`] with the fields declared in another order
#[derive(Debug, Serialize)]
struct InvoiceReordered {
    tags: BTreeMap<String, String>,
    lines: Vec<Line>,
    customer: String,
    number: u32,
}

fn invoice() -> Invoice {
    let mut tags = HashMap::new();
    tags.insert("region".to_string(), "emea".to_string());
    tags.insert("channel".to_string(), "web".to_string());
    tags.insert("account".to_string(), "acme".to_string());

    Invoice {
        number: 42,
        customer: "Acme".to_string(),
        note: None,
        lines: vec![
            Line { sku: "A-1".to_string(), quantity: 2, price: 9.5 },
            Line { sku: "B-7".to_string(), quantity: 1, price: 120.0 },
        ],
        tags,
    }
}

/// Validates canonical output is independent of field and key order.
///
/// Assertions:
/// - Ensures a struct and a reordered mirror encode identically.
/// - Ensures the omitted optional field does not appear.
/// - Ensures keys are sorted at every depth.
#[test]
fn test_canonical_encoding_ignores_declaration_order() {
    let original = invoice();
    let mirror = InvoiceReordered {
        tags: original.tags.clone().into_iter().collect(),
        lines: original.lines.clone(),
        customer: original.customer.clone(),
        number: original.number,
    };

    let a = stringify_json_deterministically(&original).unwrap();
    let b = stringify_json_deterministically(&mirror).unwrap();
    assert_eq!(a, b);
    assert!(!a.contains("note"));
    assert_eq!(
        a,
        r#"{"customer":"Acme","lines":[{"price":9.5,"quantity":2,"sku":"A-1"},{"price":120.0,"quantity":1,"sku":"B-7"}],"number":42,"tags":{"account":"acme","channel":"web","region":"emea"}}"#
    );
}

/// Validates the canonical text is stable across many freshly built maps.
#[test]
fn test_canonical_encoding_is_stable_for_hash_maps() {
    let expected = stringify_json_deterministically(&invoice()).unwrap();
    for _ in 0..32 {
        assert_eq!(stringify_json_deterministically(&invoice()).unwrap(), expected);
    }
}

/// Validates typed decode after a canonical encode.
///
/// Assertions:
/// - Ensures the decoded invoice equals the original.
/// - Ensures `create_deep_clone` yields an equal, independent copy.
#[test]
fn test_parse_json_as_and_deep_clone() -> anyhow::Result<()> {
    let original = invoice();
    let text = stringify_json_deterministically(&original)?;
    let decoded: Invoice = parse_json_as(&text)?;
    assert_eq!(decoded, original);

    let mut copy = create_deep_clone(&original)?;
    assert_eq!(copy, original);
    copy.lines.clear();
    assert_eq!(original.lines.len(), 2);
    Ok(())
}

/// Validates guard-rail error codes seen through the public API.
///
/// Assertions:
/// - Ensures primitives are rejected with `UNSUPPORTED_DATA_TYPE`.
/// - Ensures empty text is rejected with `UNSUPPORTED_DATA_TYPE`.
/// - Ensures malformed text and primitive results map to
/// `UNABLE_TO_DESERIALIZE_JSON`.
/// - Ensures maps with non-string keys map to `UNABLE_TO_SERIALIZE_JSON`.
#[test]
fn test_guard_rail_error_codes() {
    assert_eq!(stringify_json(&12).unwrap_err().code(), ErrorCode::UnsupportedDataType);
    assert_eq!(
        stringify_json_deterministically("text").unwrap_err().code(),
        ErrorCode::UnsupportedDataType
    );
    assert_eq!(parse_json("").unwrap_err().code(), ErrorCode::UnsupportedDataType);
    assert_eq!(parse_json("{oops").unwrap_err().code(), ErrorCode::UnableToDeserializeJson);
    assert_eq!(parse_json("true").unwrap_err().code(), ErrorCode::UnableToDeserializeJson);

    let mut by_tuple = HashMap::new();
    by_tuple.insert((1, 2), "pair");
    assert_eq!(
        stringify_json_deterministically(&by_tuple).unwrap_err().code(),
        ErrorCode::UnableToSerializeJson
    );
}

/// Validates empty containers are accepted both ways.
#[test]
fn test_empty_containers_round_trip() {
    assert_eq!(stringify_json_deterministically(&json!({})).unwrap(), "{}");
    assert_eq!(stringify_json(&Vec::<u8>::new()).unwrap(), "[]");
    assert_eq!(parse_json("{}").unwrap(), json!({}));
    assert_eq!(parse_json("[]").unwrap(), json!([]));
}

/// Validates `stringify_json` keeps insertion order while the canonical
/// encoder sorts.
#[test]
fn test_insertion_order_versus_canonical_order() {
    let value = json!({"zeta": 1, "alpha": {"y": 2, "x": 1}});
    assert_eq!(stringify_json(&value).unwrap(), r#"{"zeta":1,"alpha":{"y":2,"x":1}}"#);
    assert_eq!(
        stringify_json_deterministically(&value).unwrap(),
        r#"{"alpha":{"x":1,"y":2},"zeta":1}"#
    );
}
