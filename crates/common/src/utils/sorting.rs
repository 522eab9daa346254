//! Sorting of primitives and records by a primitive field
//!
//! Only strings and numbers can be sorted, and a list must not mix them.
//! Strings compare case-insensitively, numbers numerically. Sorts are
//! stable, so equal keys keep their input order in both directions.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::error::{UtilError, UtilResult};
use crate::transform::json::{to_value, value_kind};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

crate::impl_label_conversions!(SortDirection {
    Asc => "asc",
    Desc => "desc",
});

impl SortDirection {
    /// Orient an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.to_lowercase())),
            Value::Number(number) => number.as_f64().map(Self::Number),
            _ => None,
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Text(_), Self::Text(_)) | (Self::Number(_), Self::Number(_)))
    }

    fn cmp_same_kind(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

fn mixed_error(subject: &str, a: &Value, b: &Value) -> UtilError {
    UtilError::mixed_or_unsupported_data_types(format!(
        "Unable to sort list of {subject} values as they can only be string | number and must not be mixed. Received: {}, {}",
        value_kind(a),
        value_kind(b)
    ))
}

/// Compare two primitive values in the given direction
///
/// # Errors
///
/// `MIXED_OR_UNSUPPORTED_DATA_TYPES` unless both values are strings or both
/// are numbers.
pub fn compare_primitives(a: &Value, b: &Value, direction: SortDirection) -> UtilResult<Ordering> {
    match (SortKey::from_value(a), SortKey::from_value(b)) {
        (Some(left), Some(right)) if left.same_kind(&right) => {
            Ok(direction.apply(left.cmp_same_kind(&right)))
        }
        _ => Err(mixed_error("primitive", a, b)),
    }
}

// Extract every key up front so the sort itself cannot fail.
fn sort_by_keys<T: Clone>(
    keys: Vec<Value>,
    items: &[T],
    subject: &str,
    direction: SortDirection,
) -> UtilResult<Vec<T>> {
    let Some(first) = keys.first() else {
        return Ok(Vec::new());
    };
    let first_key = SortKey::from_value(first);

    let mut keyed = Vec::with_capacity(items.len());
    for (value, item) in keys.iter().zip(items) {
        match (&first_key, SortKey::from_value(value)) {
            (Some(reference), Some(key)) if reference.same_kind(&key) => keyed.push((key, item)),
            _ => return Err(mixed_error(subject, first, value)),
        }
    }

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp_same_kind(b)));
    Ok(keyed.into_iter().map(|(_, item)| item.clone()).collect())
}

/// Sort a list of strings or numbers
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::utils::{sort_primitives, SortDirection};
///
/// let names = sort_primitives(&["b", "C", "a"], SortDirection::Asc).unwrap();
/// assert_eq!(names, vec!["a", "b", "C"]);
/// # }
/// ```
pub fn sort_primitives<T>(values: &[T], direction: SortDirection) -> UtilResult<Vec<T>>
where
    T: Serialize + Clone,
{
    let keys = values.iter().map(to_value).collect::<UtilResult<Vec<_>>>()?;
    sort_by_keys(keys, values, "primitive", direction)
}

/// Sort records by the string or number stored under `key`
///
/// # Errors
///
/// - `MIXED_OR_UNSUPPORTED_DATA_TYPES` when a record lacks `key` or the field
///   types are mixed or not primitive.
/// - `UNABLE_TO_SERIALIZE_JSON` when a record cannot be represented as JSON.
pub fn sort_records<T>(records: &[T], key: &str, direction: SortDirection) -> UtilResult<Vec<T>>
where
    T: Serialize + Clone,
{
    let keys = records
        .iter()
        .map(|record| to_value(record).map(|value| value.get(key).cloned().unwrap_or(Value::Null)))
        .collect::<UtilResult<Vec<_>>>()?;
    sort_by_keys(keys, records, "record", direction)
}
