// Primitive predicates - boolean checks that never fail
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest integer an IEEE-754 double represents exactly (-(2^53 - 1))
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Smallest accepted millisecond timestamp
pub const MIN_TIMESTAMP_MS: f64 = 14_400_000.0;

/// Default length range for slugs
pub const SLUG_LENGTH: (usize, usize) = (2, 16);

/// Default length range for passwords
pub const PASSWORD_LENGTH: (usize, usize) = (8, 2048);

/// Longest accepted email address
pub const MAX_EMAIL_LENGTH: usize = 200;

static EMAIL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

static SLUG_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-._]+$").ok());

static OTP_SECRET_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z2-7]{16,64}$").ok());

static OTP_TOKEN_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").ok());

static JWT_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").ok());

static SEMVER_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .ok()
});

// A pattern that failed to compile rejects every input
fn pattern_matches(pattern: &Lazy<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

fn char_len_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// UUID versions this crate can generate and validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UuidVersion {
    /// Random
    #[default]
    V4,
    /// Unix-epoch time ordered
    V7,
}

crate::impl_label_conversions!(UuidVersion {
    V4 => "v4",
    V7 => "v7",
});

impl UuidVersion {
    /// The version nibble encoded in the UUID
    pub const fn number(&self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V7 => 7,
        }
    }
}

/// Verifies the string's length (in characters) is within an optional range
pub fn is_string_valid(value: &str, min_length: Option<usize>, max_length: Option<usize>) -> bool {
    let len = value.chars().count();
    min_length.map_or(true, |min| len >= min) && max_length.map_or(true, |max| len <= max)
}

/// Verifies a number lies within a range
///
/// Bounds default to [`MIN_SAFE_INTEGER`] and [`MAX_SAFE_INTEGER`], so `NaN`
/// and infinities are rejected unless the caller widens the range.
pub fn is_number_valid(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    let min = min.unwrap_or(MIN_SAFE_INTEGER);
    let max = max.unwrap_or(MAX_SAFE_INTEGER);
    value >= min && value <= max
}

/// Verifies a number is integral and lies within a range
pub fn is_integer_valid(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    is_number_valid(value, min, max) && value.is_finite() && value.fract() == 0.0
}

/// Verifies a millisecond unix timestamp
pub fn is_timestamp_valid(value: f64) -> bool {
    is_integer_valid(value, Some(MIN_TIMESTAMP_MS), None)
}

/// Verifies the value is a JSON object, optionally allowing it to be empty
pub fn is_object_valid(value: &Value, allow_empty: bool) -> bool {
    value.as_object().is_some_and(|map| allow_empty || !map.is_empty())
}

/// Verifies the value is a JSON array, optionally allowing it to be empty
pub fn is_array_valid(value: &Value, allow_empty: bool) -> bool {
    value.as_array().is_some_and(|items| allow_empty || !items.is_empty())
}

/// Verifies an email address
pub fn is_email_valid(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LENGTH && pattern_matches(&EMAIL_REGEX, value)
}

/// Verifies a slug: letters, digits, `-`, `.` and `_`, 2–16 characters by default
pub fn is_slug_valid(value: &str, min_length: Option<usize>, max_length: Option<usize>) -> bool {
    char_len_within(
        value,
        min_length.unwrap_or(SLUG_LENGTH.0),
        max_length.unwrap_or(SLUG_LENGTH.1),
    ) && pattern_matches(&SLUG_REGEX, value)
}

/// Verifies a password
///
/// Requires at least one lowercase letter, one uppercase letter, one digit and
/// one special character (anything outside `[A-Za-z0-9]`). Length defaults to
/// 8–2048 characters.
///
/// The four classes must all appear before the first line break (`\n`, `\r`,
/// U+2028 or U+2029). Later lines are accepted but only count toward the
/// length.
pub fn is_password_valid(value: &str, min_length: Option<usize>, max_length: Option<usize>) -> bool {
    if !char_len_within(
        value,
        min_length.unwrap_or(PASSWORD_LENGTH.0),
        max_length.unwrap_or(PASSWORD_LENGTH.1),
    ) {
        return false;
    }

    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;
    let first_line = value.split(['\n', '\r', '\u{2028}', '\u{2029}']).next().unwrap_or_default();
    for ch in first_line.chars() {
        match ch {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => special = true,
        }
    }
    lower && upper && digit && special
}

/// Verifies a base32 OTP secret (16–64 characters of `A-Z2-7`)
pub fn is_otp_secret_valid(value: &str) -> bool {
    pattern_matches(&OTP_SECRET_REGEX, value)
}

/// Verifies a 6-digit OTP token
pub fn is_otp_token_valid(value: &str) -> bool {
    pattern_matches(&OTP_TOKEN_REGEX, value)
}

/// Verifies the shape of a JSON Web Token (three base64url segments)
pub fn is_jwt_valid(value: &str) -> bool {
    pattern_matches(&JWT_REGEX, value)
}

/// Verifies a `Bearer <jwt>` authorization header
pub fn is_authorization_header_valid(value: &str) -> bool {
    value.strip_prefix("Bearer ").is_some_and(is_jwt_valid)
}

/// Verifies a semantic version (semver.org 2.0.0)
pub fn is_semver_valid(value: &str) -> bool {
    pattern_matches(&SEMVER_REGEX, value)
}

/// Verifies an absolute `http`/`https` URL with a host
pub fn is_url_valid(value: &str) -> bool {
    if value.trim() != value || value.is_empty() {
        return false;
    }
    url::Url::parse(value)
        .map(|parsed| {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        })
        .unwrap_or(false)
}

/// Verifies a hyphenated RFC 4122 UUID of the given version
pub fn is_uuid_valid(value: &str, version: UuidVersion) -> bool {
    if value.len() != 36 {
        return false;
    }
    uuid::Uuid::try_parse(value)
        .map(|id| {
            id.get_version_num() == version.number()
                && id.get_variant() == uuid::Variant::RFC4122
        })
        .unwrap_or(false)
}
