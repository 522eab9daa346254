//! Small building blocks shared by applications: validation predicates,
//! value formatters, a free-text query filter, canonical JSON and collection
//! helpers.
//!
//! # Safety and Quality
//!
//! No `unsafe` code; every fallible operation returns a [`UtilResult`] or a
//! module-specific error instead of panicking.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, validation, transform, query, utils
//! - `observability`: debug/trace events from the guard rails and the filter
//! - `runtime`: schedule-driven retries on tokio (implies `observability`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod query;
#[cfg(feature = "foundation")]
pub mod transform;
#[cfg(feature = "foundation")]
#[macro_use]
pub mod utils;
#[cfg(feature = "foundation")]
pub mod validation;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod resilience;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{ErrorClassification, ErrorCode, ErrorSeverity, UtilError, UtilResult};
#[cfg(feature = "foundation")]
pub use query::{filter_by_query, filter_values_by_query, FilterByQueryOptions};
#[cfg(feature = "runtime")]
pub use resilience::{
    delay, retry_async_function, RetryDecision, RetryError, RetryExecutor, RetryPolicy,
    RetryResult, RetrySchedule,
};
#[cfg(feature = "foundation")]
pub use transform::stringify_json_deterministically;
#[cfg(feature = "foundation")]
pub use utils::serde::{duration_secs, durations_secs};
#[cfg(feature = "foundation")]
pub use utils::{is_equal, SortDirection};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldValidator, FormatValidator, PasswordValidator, RangeValidator,
    SlugValidator, StringValidator, UrlValidator, UuidValidator, ValidationError,
    ValidationResult, Validator,
};
