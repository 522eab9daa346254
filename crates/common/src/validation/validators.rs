// Field Validators - Reusable validation components
use std::fmt::Display;

use super::predicates::{
    is_authorization_header_valid, is_email_valid, is_jwt_valid, is_otp_secret_valid,
    is_otp_token_valid, is_password_valid, is_semver_valid, is_slug_valid, is_string_valid,
    is_url_valid, is_uuid_valid, UuidVersion,
};

/// Trait for field validators
pub trait FieldValidator<T> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

// String validators accept both owned and borrowed strings
macro_rules! impl_str_field_validator {
    ($validator:ty) => {
        impl FieldValidator<&str> for $validator {
            fn validate(&self, value: &&str) -> Result<(), String> {
                self.check(value)
            }
        }

        impl FieldValidator<String> for $validator {
            fn validate(&self, value: &String) -> Result<(), String> {
                self.check(value.as_str())
            }
        }
    };
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
    integer: bool,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None, integer: false }
    }

    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max), integer: false }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl RangeValidator<f64> {
    /// Bounded by the safe-integer range and requiring integral values
    pub fn integer() -> Self {
        Self {
            min: Some(super::MIN_SAFE_INTEGER),
            max: Some(super::MAX_SAFE_INTEGER),
            integer: true,
        }
    }

    /// Millisecond unix timestamps
    pub fn timestamp() -> Self {
        Self::integer().min(super::predicates::MIN_TIMESTAMP_MS)
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone + Into<f64>,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        let as_float: f64 = value.clone().into();
        if as_float.is_nan() {
            return Err("Value must be a number".to_string());
        }

        if let Some(ref min) = self.min {
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        if self.integer && as_float.fract() != 0.0 {
            return Err("Value must be an integer".to_string());
        }

        Ok(())
    }
}

/// String validator with length constraints and an optional pattern
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<regex::Regex>,
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum length (in characters)
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length (in characters)
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set pattern to match
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(regex::Regex::new(pattern)?);
        Ok(self)
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if !is_string_valid(value, self.min_length, None) {
            return Err(format!(
                "Length must be at least {} characters",
                self.min_length.unwrap_or_default()
            ));
        }

        if !is_string_valid(value, None, self.max_length) {
            return Err(format!(
                "Length must not exceed {} characters",
                self.max_length.unwrap_or_default()
            ));
        }

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(format!("Value must match pattern: {}", pattern.as_str()));
            }
        }

        Ok(())
    }
}

impl_str_field_validator!(StringValidator);

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if is_email_valid(value) {
            Ok(())
        } else {
            Err("Invalid email format".to_string())
        }
    }
}

impl_str_field_validator!(EmailValidator);

/// Slug validator
#[derive(Debug, Clone, Default)]
pub struct SlugValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl SlugValidator {
    /// Create a slug validator with the default 2–16 length range
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the length range
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if is_slug_valid(value, self.min_length, self.max_length) {
            Ok(())
        } else {
            Err("Invalid slug format".to_string())
        }
    }
}

impl_str_field_validator!(SlugValidator);

/// Password strength validator
#[derive(Debug, Clone, Default)]
pub struct PasswordValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl PasswordValidator {
    /// Create a password validator with the default 8–2048 length range
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the length range
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if is_password_valid(value, self.min_length, self.max_length) {
            Ok(())
        } else {
            Err("Password must mix lowercase, uppercase, digits and special characters"
                .to_string())
        }
    }
}

impl_str_field_validator!(PasswordValidator);

/// URL validator
#[derive(Debug, Clone, Default)]
pub struct UrlValidator {
    require_https: bool,
}

impl UrlValidator {
    /// Create a new URL validator accepting `http` and `https`
    pub fn new() -> Self {
        Self::default()
    }

    /// Require HTTPS
    pub fn require_https(mut self) -> Self {
        self.require_https = true;
        self
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if !is_url_valid(value) {
            return Err("Invalid URL format".to_string());
        }
        if self.require_https && !value.starts_with("https://") {
            return Err("URL must use HTTPS".to_string());
        }
        Ok(())
    }
}

impl_str_field_validator!(UrlValidator);

/// UUID validator for a single version
#[derive(Debug, Clone, Default)]
pub struct UuidValidator {
    version: UuidVersion,
}

impl UuidValidator {
    /// Create a UUID validator for the given version
    pub fn new(version: UuidVersion) -> Self {
        Self { version }
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if is_uuid_valid(value, self.version) {
            Ok(())
        } else {
            Err(format!("Invalid UUID {}", self.version))
        }
    }
}

impl_str_field_validator!(UuidValidator);

/// Fixed-format token validators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatValidator {
    /// JSON Web Token
    Jwt,
    /// `Bearer <jwt>` header value
    AuthorizationHeader,
    /// Semantic version
    Semver,
    /// Base32 OTP secret
    OtpSecret,
    /// 6-digit OTP token
    OtpToken,
}

impl FormatValidator {
    fn check(&self, value: &str) -> Result<(), String> {
        let (valid, label) = match self {
            Self::Jwt => (is_jwt_valid(value), "JWT"),
            Self::AuthorizationHeader => {
                (is_authorization_header_valid(value), "authorization header")
            }
            Self::Semver => (is_semver_valid(value), "semantic version"),
            Self::OtpSecret => (is_otp_secret_valid(value), "OTP secret"),
            Self::OtpToken => (is_otp_token_valid(value), "OTP token"),
        };
        if valid {
            Ok(())
        } else {
            Err(format!("Invalid {label}"))
        }
    }
}

impl_str_field_validator!(FormatValidator);
