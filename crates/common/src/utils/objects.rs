//! Collection and record helpers

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{UtilError, UtilResult};
use crate::transform::json::{stringify_json_deterministically, to_value, value_kind};

/// Return a shuffled copy of `input` (Fisher–Yates)
///
/// # Errors
///
/// `INVALID_OR_EMPTY_ARRAY` when `input` has fewer than 2 items.
pub fn shuffle_array<T: Clone>(input: &[T]) -> UtilResult<Vec<T>> {
    if input.len() < 2 {
        return Err(UtilError::invalid_or_empty_array(
            "For an array to be shuffled it must contain at least 2 items.",
        ));
    }

    let mut shuffled = input.to_vec();
    let mut rng = rand::thread_rng();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    Ok(shuffled)
}

fn record_and_keys<T, K>(input: &T, keys: &[K]) -> UtilResult<Map<String, Value>>
where
    T: Serialize + ?Sized,
    K: AsRef<str>,
{
    let record = match to_value(input)? {
        Value::Object(map) if !map.is_empty() => map,
        _ => {
            return Err(UtilError::invalid_or_empty_object(
                "The input must be a valid and non-empty object.",
            ))
        }
    };
    if keys.is_empty() {
        return Err(UtilError::invalid_or_empty_array(
            "The keys must be a valid and non-empty array of strings.",
        ));
    }
    Ok(record)
}

/// Shallow copy of `input` holding only `keys`
///
/// Keys missing from `input` are skipped. The result follows the order of
/// `keys`.
pub fn pick_props<T, K>(input: &T, keys: &[K]) -> UtilResult<Map<String, Value>>
where
    T: Serialize + ?Sized,
    K: AsRef<str>,
{
    let mut record = record_and_keys(input, keys)?;
    Ok(keys
        .iter()
        .filter_map(|key| {
            let key = key.as_ref();
            record.remove(key).map(|value| (key.to_string(), value))
        })
        .collect())
}

/// Shallow copy of `input` without `keys`
pub fn omit_props<T, K>(input: &T, keys: &[K]) -> UtilResult<Map<String, Value>>
where
    T: Serialize + ?Sized,
    K: AsRef<str>,
{
    let record = record_and_keys(input, keys)?;
    Ok(record
        .into_iter()
        .filter(|(name, _)| !keys.iter().any(|key| key.as_ref() == name))
        .collect())
}

fn canonical_side<T: Serialize + ?Sized>(value: &T, side: char) -> UtilResult<String> {
    let tree = to_value(value).map_err(|err| {
        UtilError::unable_to_serialize_json(format!(
            "Value '{side}' could not be serialized into a JSON string in order to be compared: {}",
            err.message()
        ))
    })?;
    if !matches!(tree, Value::Object(_) | Value::Array(_)) {
        return Err(UtilError::unsupported_data_type(format!(
            "Value '{side}' must be an object or an array in order to be compared. Received: {}",
            value_kind(&tree)
        )));
    }
    stringify_json_deterministically(&tree)
}

/// Structural equality of two records or sequences
///
/// Object key order never matters while sequence order always does. Fields
/// skipped during serialization (e.g. `None` with `skip_serializing_if`)
/// are indistinguishable from missing keys.
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::utils::is_equal;
/// use serde_json::json;
///
/// assert!(is_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})).unwrap());
/// assert!(!is_equal(&json!([1, 2, 3]), &json!([3, 2, 1])).unwrap());
/// assert!(is_equal(&json!(1), &json!([1])).is_err());
/// # }
/// ```
pub fn is_equal<A, B>(a: &A, b: &B) -> UtilResult<bool>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let left = canonical_side(a, 'a')?;
    let right = canonical_side(b, 'b')?;
    Ok(left == right)
}
