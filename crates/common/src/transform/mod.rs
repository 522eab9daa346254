//! Value transformers
//!
//! - **[`number`]**: en-US number formatting with prefix/suffix
//! - **[`date`]**: named date/time templates
//! - **[`size`]**: byte sizes and badge counters
//! - **[`strings`]**: capitalization, slugs, truncation, masking
//! - **[`json`]**: guarded JSON encoding and the canonical encoder

pub mod date;
pub mod json;
pub mod number;
pub mod size;
pub mod strings;

pub use date::{prettify_date, prettify_timestamp, DateTemplate};
pub use json::{
    can_json_be_deserialized, can_json_be_serialized, create_deep_clone, parse_json,
    parse_json_as, sort_keys_deep, stringify_json, stringify_json_deterministically,
    validate_json_deserialization_result, validate_json_serialization_result,
};
pub use number::{
    build_number_format_config, prettify_number, NumberFormatConfig, PartialNumberFormatConfig,
};
pub use size::{prettify_badge_count, prettify_file_size};
pub use strings::{capitalize_first, mask_middle, to_slug, to_title_case, truncate_text};
