//! Value validation.
//!
//! Two layers live here:
//!
//! - [`predicates`]: pure `is_*_valid` checks returning `bool`. They never
//!   fail and never log, so they are safe to call from hot paths.
//! - [`Validator`] plus the [`FieldValidator`] implementations: an
//!   aggregator that runs predicates against named fields and collects
//!   human-readable [`FieldError`]s.
//!
//! ```
//! # #[cfg(feature = "foundation")]
//! # {
//! use primkit_common::validation::{EmailValidator, SlugValidator, Validator};
//!
//! let mut validator = Validator::new();
//! validator.validate_field("email", &"user@example.com", &EmailValidator::new());
//! validator.validate_field("slug", &"x", &SlugValidator::new());
//!
//! let err = validator.finalize().unwrap_err();
//! assert_eq!(err.error_count(), 1);
//! assert_eq!(err.errors[0].field, "slug");
//! # }
//! ```
use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

pub mod predicates;
mod validators;

pub use predicates::{
    is_array_valid, is_authorization_header_valid, is_email_valid, is_integer_valid,
    is_jwt_valid, is_number_valid, is_object_valid, is_otp_secret_valid, is_otp_token_valid,
    is_password_valid, is_semver_valid, is_slug_valid, is_string_valid, is_timestamp_valid,
    is_url_valid, is_uuid_valid, UuidVersion, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
};
pub use validators::{
    EmailValidator, FieldValidator, FormatValidator, PasswordValidator, RangeValidator,
    SlugValidator, StringValidator, UrlValidator, UuidValidator,
};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation failure carrying every field-level error that was collected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
    pub context: Option<ValidationContext>,
}

impl ValidationError {
    /// Create an empty validation error
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error tagged with a machine-readable code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    /// Set validation context
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field path
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
        if self.context.is_none() {
            self.context = other.context;
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error with no specific field errors"),
            [only] => write!(f, "Validation failed: {}: {}", only.field, only.message),
            errors => {
                write!(f, "Validation failed with {} errors: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `profile.email`
    pub field: String,
    pub message: String,
    pub code: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None, metadata: HashMap::new() }
    }

    /// Add metadata to the error
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Tracks the nesting path and short-circuit behavior of a [`Validator`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    pub path: Vec<String>,
    pub stop_on_first: bool,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop collecting after the first error
    pub fn stop_on_first_error(mut self) -> Self {
        self.stop_on_first = true;
        self
    }

    /// Add path segment for nested validation
    pub fn push_path(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// Remove last path segment
    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    /// Get current path as string
    pub fn current_path(&self) -> String {
        self.path.join(".")
    }
}

/// Runs field validators and collects their failures
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    context: ValidationContext,
    stopped: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with context
    pub fn with_context(context: ValidationContext) -> Self {
        Self { errors: ValidationError::new(), context, stopped: false }
    }

    fn should_short_circuit(&self) -> bool {
        self.context.stop_on_first && self.stopped
    }

    /// Record an error for `field`, prefixed with the current nesting path
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        if self.should_short_circuit() {
            return;
        }

        let field = if self.context.path.is_empty() {
            field.into()
        } else {
            format!("{}.{}", self.context.current_path(), field.into())
        };
        self.errors.add_field_error(field, message);

        if self.context.stop_on_first {
            self.stopped = true;
        }
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        if self.should_short_circuit() {
            return self;
        }

        if let Err(msg) = validator.validate(value) {
            self.add_error(field, msg);
        }
        self
    }

    /// Validate a string is not blank
    pub fn validate_not_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if !self.should_short_circuit() && value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
        self
    }

    /// Validate a JSON value is a record, optionally rejecting `{}`
    pub fn validate_object(&mut self, field: &str, value: &Value, allow_empty: bool) -> &mut Self {
        if !self.should_short_circuit() && !is_object_valid(value, allow_empty) {
            self.add_error(field, "must be a non-empty object");
        }
        self
    }

    /// Validate a JSON value is a sequence, optionally rejecting `[]`
    pub fn validate_array(&mut self, field: &str, value: &Value, allow_empty: bool) -> &mut Self {
        if !self.should_short_circuit() && !is_array_valid(value, allow_empty) {
            self.add_error(field, "must be a non-empty array");
        }
        self
    }

    /// Validate with nested context
    pub fn validate_nested<F>(&mut self, field: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Validator),
    {
        if self.should_short_circuit() {
            return self;
        }

        self.context.push_path(field);
        f(self);
        self.context.pop_path();
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Get errors without consuming validator
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.with_context(self.context))
        }
    }

    /// Clear all errors
    pub fn clear(&mut self) {
        self.errors = ValidationError::new();
        self.stopped = false;
    }
}
