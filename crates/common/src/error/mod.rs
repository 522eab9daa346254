//! Error types shared by every primkit module
//!
//! All fallible helpers in this crate return [`UtilResult`]. The error carries
//! a stable [`ErrorCode`] so callers can branch on the kind of failure instead
//! of matching message text:
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use primkit_common::error::ErrorCode;
//! use primkit_common::transform::json::stringify_json_deterministically;
//!
//! let err = stringify_json_deterministically(&42).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::UnsupportedDataType);
//! assert_eq!(err.code().to_string(), "UNSUPPORTED_DATA_TYPE");
//! # }
//! ```
//!
//! ## Error Codes
//!
//! | Code | Raised by |
//! |------|-----------|
//! | `UNSUPPORTED_DATA_TYPE` | JSON guard rails, deep equality |
//! | `UNABLE_TO_SERIALIZE_JSON` | stringify paths, deep equality |
//! | `UNABLE_TO_DESERIALIZE_JSON` | parse paths |
//! | `INVALID_OR_EMPTY_ARRAY` | shuffle, pick/omit key lists |
//! | `INVALID_OR_EMPTY_OBJECT` | pick/omit input |
//! | `MIXED_OR_UNSUPPORTED_DATA_TYPES` | primitive and record sorting |
//!
//! ## ErrorClassification
//!
//! [`UtilError`] implements [`ErrorClassification`] so it can be fed to the
//! retry helpers in `resilience`. None of the codes above describe transient
//! conditions, so every variant reports `is_retryable() == false`.

use std::fmt;

use thiserror::Error;

/// Standard result type using UtilError
pub type UtilResult<T> = Result<T, UtilError>;

/// Stable identifier for every failure this crate can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The input is not the shape the operation requires
    UnsupportedDataType,
    /// The JSON encoder failed or produced a degenerate result
    UnableToSerializeJson,
    /// The JSON decoder failed or produced something other than an object/array
    UnableToDeserializeJson,
    /// An array argument is missing, empty or too short
    InvalidOrEmptyArray,
    /// An object argument is missing or empty
    InvalidOrEmptyObject,
    /// Values being sorted are not all strings or all numbers
    MixedOrUnsupportedDataTypes,
}

impl ErrorCode {
    /// The SCREAMING_SNAKE name of the code
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedDataType => "UNSUPPORTED_DATA_TYPE",
            Self::UnableToSerializeJson => "UNABLE_TO_SERIALIZE_JSON",
            Self::UnableToDeserializeJson => "UNABLE_TO_DESERIALIZE_JSON",
            Self::InvalidOrEmptyArray => "INVALID_OR_EMPTY_ARRAY",
            Self::InvalidOrEmptyObject => "INVALID_OR_EMPTY_OBJECT",
            Self::MixedOrUnsupportedDataTypes => "MIXED_OR_UNSUPPORTED_DATA_TYPES",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by validation-guarded helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    #[error("{message}")]
    UnsupportedDataType { message: String },

    #[error("{message}")]
    UnableToSerializeJson { message: String },

    #[error("{message}")]
    UnableToDeserializeJson { message: String },

    #[error("{message}")]
    InvalidOrEmptyArray { message: String },

    #[error("{message}")]
    InvalidOrEmptyObject { message: String },

    #[error("{message}")]
    MixedOrUnsupportedDataTypes { message: String },
}

impl UtilError {
    /// Create an unsupported data type error
    pub fn unsupported_data_type<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedDataType { message: message.into() }
    }

    /// Create a JSON serialization error
    pub fn unable_to_serialize_json<S: Into<String>>(message: S) -> Self {
        Self::UnableToSerializeJson { message: message.into() }
    }

    /// Create a JSON deserialization error
    pub fn unable_to_deserialize_json<S: Into<String>>(message: S) -> Self {
        Self::UnableToDeserializeJson { message: message.into() }
    }

    /// Create an invalid or empty array error
    pub fn invalid_or_empty_array<S: Into<String>>(message: S) -> Self {
        Self::InvalidOrEmptyArray { message: message.into() }
    }

    /// Create an invalid or empty object error
    pub fn invalid_or_empty_object<S: Into<String>>(message: S) -> Self {
        Self::InvalidOrEmptyObject { message: message.into() }
    }

    /// Create a mixed or unsupported data types error
    pub fn mixed_or_unsupported_data_types<S: Into<String>>(message: S) -> Self {
        Self::MixedOrUnsupportedDataTypes { message: message.into() }
    }

    /// The stable code for this error
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedDataType { .. } => ErrorCode::UnsupportedDataType,
            Self::UnableToSerializeJson { .. } => ErrorCode::UnableToSerializeJson,
            Self::UnableToDeserializeJson { .. } => ErrorCode::UnableToDeserializeJson,
            Self::InvalidOrEmptyArray { .. } => ErrorCode::InvalidOrEmptyArray,
            Self::InvalidOrEmptyObject { .. } => ErrorCode::InvalidOrEmptyObject,
            Self::MixedOrUnsupportedDataTypes { .. } => ErrorCode::MixedOrUnsupportedDataTypes,
        }
    }

    /// The human readable message, without the code
    pub fn message(&self) -> &str {
        match self {
            Self::UnsupportedDataType { message }
            | Self::UnableToSerializeJson { message }
            | Self::UnableToDeserializeJson { message }
            | Self::InvalidOrEmptyArray { message }
            | Self::InvalidOrEmptyObject { message }
            | Self::MixedOrUnsupportedDataTypes { message } => message,
        }
    }

    /// Convert error to structured logging fields
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tracing::debug;
    ///
    /// let fields = err.as_tracing_fields();
    /// debug!(error_code = %fields[0].1, message = %fields[1].1, "guard rejected value");
    /// ```
    pub fn as_tracing_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_code", self.code().to_string()),
            ("message", self.message().to_string()),
            ("severity", self.severity().to_string()),
        ]
    }
}

impl ErrorClassification for UtilError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnableToSerializeJson { .. } | Self::UnableToDeserializeJson { .. } => {
                ErrorSeverity::Error
            }
            Self::UnsupportedDataType { .. }
            | Self::InvalidOrEmptyArray { .. }
            | Self::InvalidOrEmptyObject { .. }
            | Self::MixedOrUnsupportedDataTypes { .. } => ErrorSeverity::Warning,
        }
    }
}

/// Error classification trait for consistent error handling across modules
///
/// The retry helpers consult [`ErrorClassification::is_retryable`] through
/// `resilience::policies::ClassifiedRetry`.
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, caller passed an input of the wrong shape
    Warning,
    /// Error, an encoder or decoder failed
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
