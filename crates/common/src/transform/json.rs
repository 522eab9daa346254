//! JSON encoding behind guard rails, plus a canonical (key-sorted) encoder
//!
//! Only records and sequences may be encoded or decoded at the top level.
//! Every failure surfaces as a [`UtilError`] carrying one of
//! `UNSUPPORTED_DATA_TYPE`, `UNABLE_TO_SERIALIZE_JSON` or
//! `UNABLE_TO_DESERIALIZE_JSON`.
//!
//! The canonical encoder sorts object keys at every depth before encoding,
//! so two values that differ only in key insertion order produce identical
//! text:
//!
//! ```
//! # #[cfg(feature = "foundation")]
//! # {
//! use primkit_common::transform::stringify_json_deterministically;
//! use serde_json::json;
//!
//! let a = stringify_json_deterministically(&json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
//! let b = stringify_json_deterministically(&json!({"a": {"c": 3, "d": 2}, "b": 1})).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a, r#"{"a":{"c":3,"d":2},"b":1}"#);
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
#[cfg(feature = "observability")]
use tracing::debug;

use crate::error::{UtilError, UtilResult};

/// Short name of a JSON value's kind, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Accept only records and sequences (empty ones included) for encoding
pub fn can_json_be_serialized(value: &Value) -> UtilResult<()> {
    if is_container(value) {
        return Ok(());
    }

    #[cfg(feature = "observability")]
    debug!(kind = value_kind(value), "Rejected JSON value for serialization");

    Err(UtilError::unsupported_data_type(format!(
        "The JSON value must be an object or an array in order to be stringified. Received: {}",
        value_kind(value)
    )))
}

/// Ensure an encoder produced a non-empty string
pub fn validate_json_serialization_result(result: &str) -> UtilResult<()> {
    if result.is_empty() {
        return Err(UtilError::unable_to_serialize_json(
            "Stringifying the JSON value produced an empty result.",
        ));
    }
    Ok(())
}

/// Accept only non-empty text for decoding
pub fn can_json_be_deserialized(text: &str) -> UtilResult<()> {
    if text.is_empty() {
        #[cfg(feature = "observability")]
        debug!("Rejected empty JSON text for deserialization");

        return Err(UtilError::unsupported_data_type(
            "The JSON value must be a non-empty string in order to be parsed.",
        ));
    }
    Ok(())
}

/// Ensure a decoder produced a record or a sequence
pub fn validate_json_deserialization_result(text: &str, result: &Value) -> UtilResult<()> {
    if is_container(result) {
        return Ok(());
    }
    Err(UtilError::unable_to_deserialize_json(format!(
        "Parsing the JSON value '{text}' produced an invalid result: {}.",
        value_kind(result)
    )))
}

/// Convert any serializable value into a [`Value`] tree
pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> UtilResult<Value> {
    serde_json::to_value(value).map_err(|err| {
        UtilError::unable_to_serialize_json(format!(
            "The value could not be converted into JSON: {err}"
        ))
    })
}

/// Encode a record or sequence, keeping keys in insertion order
pub fn stringify_json<T: Serialize + ?Sized>(value: &T) -> UtilResult<String> {
    let tree = to_value(value)?;
    can_json_be_serialized(&tree)?;
    encode(&tree)
}

fn encode(tree: &Value) -> UtilResult<String> {
    let text = serde_json::to_string(tree).map_err(|err| {
        UtilError::unable_to_serialize_json(format!("Stringifying the JSON value failed: {err}"))
    })?;
    validate_json_serialization_result(&text)?;
    Ok(text)
}

/// Rebuild a value with the keys of every object sorted by byte order
///
/// Sequences keep their element order and primitives are copied as-is.
pub fn sort_keys_deep(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(sort_keys_deep).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted = Map::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys_deep(child));
            }
            Value::Object(sorted)
        }
        primitive => primitive.clone(),
    }
}

/// Encode a record or sequence canonically
///
/// Output is compact (no whitespace) and keys are sorted at every depth, so
/// it is stable across runs and independent of how the value was assembled.
///
/// # Errors
///
/// - `UNABLE_TO_SERIALIZE_JSON` when the value cannot be represented as JSON
///   (e.g. a map with non-string keys) or encoding yields empty output.
/// - `UNSUPPORTED_DATA_TYPE` when the top-level value is a primitive.
pub fn stringify_json_deterministically<T: Serialize + ?Sized>(value: &T) -> UtilResult<String> {
    let tree = to_value(value)?;
    can_json_be_serialized(&tree)?;
    encode(&sort_keys_deep(&tree))
}

/// Decode text into a record or sequence
pub fn parse_json(text: &str) -> UtilResult<Value> {
    can_json_be_deserialized(text)?;
    let result: Value = serde_json::from_str(text).map_err(|err| {
        UtilError::unable_to_deserialize_json(format!(
            "Parsing the JSON value '{text}' failed: {err}"
        ))
    })?;
    validate_json_deserialization_result(text, &result)?;
    Ok(result)
}

/// Decode text into a typed record or sequence
pub fn parse_json_as<T: DeserializeOwned>(text: &str) -> UtilResult<T> {
    let tree = parse_json(text)?;
    serde_json::from_value(tree).map_err(|err| {
        UtilError::unable_to_deserialize_json(format!(
            "The JSON value '{text}' does not match the expected shape: {err}"
        ))
    })
}

/// Deep-copy a value by encoding and decoding it
pub fn create_deep_clone<T>(value: &T) -> UtilResult<T>
where
    T: Serialize + DeserializeOwned,
{
    parse_json_as(&stringify_json(value)?)
}
