//! Substring query filter over arbitrary collections

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "observability")]
use tracing::trace;

use super::normalize::{build_normalized_query_tokens, normalize_item_value};

/// Options for [`filter_by_query`]
///
/// The default matches against the whole item and returns every match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterByQueryOptions {
    /// Match against this field only instead of the whole item. An empty name
    /// or a field the item lacks falls back to the whole item.
    pub query_prop: Option<String>,
    /// Maximum number of items to return
    pub limit: Option<usize>,
}

impl FilterByQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_prop(mut self, prop: impl Into<String>) -> Self {
        self.query_prop = Some(prop.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Keep the items whose normalized form contains at least one query token
///
/// Matching is plain substring containment, OR-ed across tokens. Survivors
/// keep their input order and are cut to `options.limit`. An empty
/// collection, an empty query, or a query made only of spaces returns every
/// item unchanged. With `query_prop`, only that field is searched when the
/// item has it; otherwise the whole item is. Items that cannot be represented
/// as JSON never match.
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::query::{filter_by_query, FilterByQueryOptions};
/// use serde_json::json;
///
/// let people = vec![json!({"name": "Alice"}), json!({"name": "Bob"})];
/// let options = FilterByQueryOptions::new().query_prop("name");
/// assert_eq!(filter_by_query(&people, "ali", &options), vec![json!({"name": "Alice"})]);
/// # }
/// ```
pub fn filter_by_query<T>(items: &[T], query: &str, options: &FilterByQueryOptions) -> Vec<T>
where
    T: Serialize + Clone,
{
    filter_with(items, query, options, |item| serde_json::to_value(item).ok())
}

/// [`filter_by_query`] for items that already are JSON values
pub fn filter_values_by_query(
    items: &[Value],
    query: &str,
    options: &FilterByQueryOptions,
) -> Vec<Value> {
    filter_with(items, query, options, |item| Some(item.clone()))
}

fn filter_with<T, F>(items: &[T], query: &str, options: &FilterByQueryOptions, view: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<Value>,
{
    if items.is_empty() || query.is_empty() {
        return items.to_vec();
    }

    let tokens = build_normalized_query_tokens(query);
    if tokens.is_empty() {
        return items.to_vec();
    }

    let limit = options.limit.unwrap_or(usize::MAX);
    let matches: Vec<T> = items
        .iter()
        .filter(|item| {
            let haystack = view(item)
                .map(|value| searchable_text(&value, options.query_prop.as_deref()))
                .unwrap_or_default();
            tokens.iter().any(|token| haystack.contains(token.as_str()))
        })
        .take(limit)
        .cloned()
        .collect();

    #[cfg(feature = "observability")]
    trace!(
        total = items.len(),
        matched = matches.len(),
        tokens = tokens.len(),
        "Filtered items by query"
    );

    matches
}

fn searchable_text(value: &Value, query_prop: Option<&str>) -> String {
    let field = query_prop.filter(|prop| !prop.is_empty()).and_then(|prop| value.get(prop));
    normalize_item_value(field.unwrap_or(value))
}
