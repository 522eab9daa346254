//! Free-text query filtering
//!
//! A query is split into lowercase tokens on spaces. Each item is flattened
//! into a lowercase "normalized form" (see [`normalize_item_value`]) and kept
//! when any token is a substring of that form.
//!
//! Results are not ranked: survivors keep their input order.

mod filter;
mod normalize;

pub use filter::{filter_by_query, filter_values_by_query, FilterByQueryOptions};
pub use normalize::{build_normalized_query_tokens, normalize_item, normalize_item_value};
