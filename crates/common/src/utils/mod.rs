//! Common utility functions and helper macros
//!
//! - **[`generators`]**: UUIDs, random strings and numbers, sequences
//! - **[`sorting`]**: primitive and record sorting
//! - **[`objects`]**: shuffle, pick/omit, deep equality
//! - **[`macros`]**: label conversions for fieldless enums
//! - **[`serde`]**: durations as seconds

#[macro_use]
pub mod macros;
pub mod generators;
pub mod objects;
pub mod serde;
pub mod sorting;

pub use self::generators::{
    generate_random_float, generate_random_integer, generate_random_string, generate_sequence,
    generate_uuid, DEFAULT_ALPHABET,
};
pub use self::objects::{is_equal, omit_props, pick_props, shuffle_array};
pub use self::serde::{duration_secs, durations_secs};
pub use self::sorting::{compare_primitives, sort_primitives, sort_records, SortDirection};
