//! Integration tests for the validation module
//!
//! Validates a sign-up payload end to end: predicates on raw values, field
//! validators composed through `Validator`, nested paths and the aggregated
//! `ValidationError`.

#![allow(clippy::doc_lazy_continuation)]

use primkit_common::utils::generate_uuid;
use primkit_common::validation::{
    is_array_valid, is_authorization_header_valid, is_email_valid, is_integer_valid,
    is_number_valid, is_object_valid, is_otp_secret_valid, is_otp_token_valid, is_password_valid,
    is_semver_valid, is_slug_valid, is_string_valid, is_timestamp_valid, is_url_valid,
    is_uuid_valid, EmailValidator, FormatValidator, PasswordValidator, RangeValidator,
    SlugValidator, StringValidator, UrlValidator, UuidValidator, UuidVersion, ValidationContext,
    Validator, MAX_SAFE_INTEGER,
};
use serde_json::{json, Value};

struct SignUp {
    id: String,
    email: String,
    username: String,
    password: String,
    website: String,
    age: f64,
    client_version: String,
    otp: String,
    profile: Value,
    roles: Value,
}

fn valid_sign_up() -> SignUp {
    SignUp {
        id: generate_uuid(UuidVersion::V7),
        email: "ada@example.com".to_string(),
        username: "ada-l".to_string(),
        password: "Sup3r$ecret".to_string(),
        website: "https://ada.dev".to_string(),
        age: 36.0,
        client_version: "2.1.0-beta.3+build.7".to_string(),
        otp: "042133".to_string(),
        profile: json!({"city": "London"}),
        roles: json!(["admin"]),
    }
}

fn validate(form: &SignUp) -> Validator {
    let mut validator = Validator::new();
    validator
        .validate_field("id", &form.id, &UuidValidator::new(UuidVersion::V7))
        .validate_field("email", &form.email, &EmailValidator::new())
        .validate_field("username", &form.username, &SlugValidator::new())
        .validate_field("password", &form.password, &PasswordValidator::new())
        .validate_field("website", &form.website, &UrlValidator::new().require_https())
        .validate_field("age", &form.age, &RangeValidator::integer().min(13.0).max(130.0))
        .validate_field("clientVersion", &form.client_version, &FormatValidator::Semver)
        .validate_field("otp", &form.otp, &FormatValidator::OtpToken)
        .validate_object("profile", &form.profile, false)
        .validate_array("roles", &form.roles, false);
    validator
}

/// Validates a well-formed payload passes every rule.
#[test]
fn test_valid_sign_up_passes() {
    let validator = validate(&valid_sign_up());
    assert!(!validator.has_errors(), "{}", validator.errors());
    assert!(validator.finalize().is_ok());
}

/// Validates every broken field is reported with its message.
///
/// Assertions:
/// - Ensures one error per invalid field in declaration order.
/// - Ensures the `Display` output lists every error.
#[test]
fn test_invalid_sign_up_collects_every_error() {
    let form = SignUp {
        id: generate_uuid(UuidVersion::V4),
        email: "ada@".to_string(),
        username: "a".to_string(),
        password: "password".to_string(),
        website: "http://ada.dev".to_string(),
        age: 12.5,
        client_version: "v1.0".to_string(),
        otp: "12345".to_string(),
        profile: json!({}),
        roles: json!("admin"),
    };

    let err = validate(&form).finalize().unwrap_err();
    let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "id",
            "email",
            "username",
            "password",
            "website",
            "age",
            "clientVersion",
            "otp",
            "profile",
            "roles"
        ]
    );

    assert_eq!(err.field_errors("id")[0].message, "Invalid UUID v7");
    assert_eq!(err.field_errors("website")[0].message, "URL must use HTTPS");
    assert_eq!(err.field_errors("age")[0].message, "Value must be at least 13");
    assert_eq!(err.field_errors("otp")[0].message, "Invalid OTP token");

    let text = err.to_string();
    assert!(text.starts_with("Validation failed with 10 errors: "));
    assert!(text.contains("clientVersion: Invalid semantic version"));
}

/// Validates nested paths and stop-on-first behavior.
///
/// Assertions:
/// - Ensures nested errors are prefixed with the parent path.
/// - Ensures only the first error is kept when short-circuiting.
#[test]
fn test_nested_validation_and_short_circuit() {
    let mut validator = Validator::new();
    validator.validate_nested("billing", |v| {
        v.validate_not_empty("street", " ");
        v.validate_nested("contact", |v| {
            v.validate_field("email", &"nope", &EmailValidator::new());
        });
    });
    let err = validator.finalize().unwrap_err();
    assert_eq!(err.errors[0].field, "billing.street");
    assert_eq!(err.errors[0].message, "cannot be empty");
    assert_eq!(err.errors[1].field, "billing.contact.email");

    let mut strict = Validator::with_context(ValidationContext::new().stop_on_first_error());
    strict
        .validate_not_empty("a", "")
        .validate_not_empty("b", "")
        .validate_field("c", &"x", &StringValidator::new().min_length(3));
    assert_eq!(strict.error_count(), 1);
}

/// Validates numeric predicates around the safe-integer bounds.
#[test]
fn test_numeric_predicates() {
    assert!(is_number_valid(MAX_SAFE_INTEGER, None, None));
    assert!(!is_number_valid(MAX_SAFE_INTEGER + 2.0, None, None));
    assert!(!is_number_valid(f64::NAN, None, None));
    assert!(!is_number_valid(f64::INFINITY, None, Some(f64::MAX)));
    assert!(is_number_valid(f64::INFINITY, None, Some(f64::INFINITY)));

    assert!(is_integer_valid(-3.0, Some(-5.0), Some(5.0)));
    assert!(!is_integer_valid(2.5, None, None));
    assert!(is_timestamp_valid(1_700_000_000_000.0));
    assert!(!is_timestamp_valid(0.0));
}

/// Validates string-shaped predicates on representative inputs.
#[test]
fn test_string_predicates() {
    assert!(is_string_valid("héllo", Some(5), Some(5)));
    assert!(is_email_valid("first.last+tag@sub.example.io"));
    assert!(!is_email_valid(&format!("{}@example.com", "a".repeat(200))));
    assert!(is_slug_valid("my_slug.v2", None, None));
    assert!(!is_slug_valid("my slug", None, None));
    assert!(is_password_valid("Aa1!aaaa", None, None));
    assert!(!is_password_valid("Aa1!aaa", None, None));
    assert!(is_otp_secret_valid("JBSWY3DPEHPK3PXP"));
    assert!(!is_otp_secret_valid("jbswy3dpehpk3pxp"));
    assert!(is_otp_token_valid("000000"));
    assert!(is_authorization_header_valid("Bearer aaa.bbb.ccc"));
    assert!(!is_authorization_header_valid("Basic aaa.bbb.ccc"));
    assert!(is_semver_valid("0.0.1"));
    assert!(!is_semver_valid("01.0.0"));
    assert!(is_url_valid("http://localhost:8080/path?q=1"));
    assert!(!is_url_valid("ftp://example.com"));
}

/// Validates structural predicates and generated UUIDs.
#[test]
fn test_structural_predicates_and_uuids() {
    assert!(is_object_valid(&json!({}), true));
    assert!(!is_object_valid(&json!([]), true));
    assert!(is_array_valid(&json!([]), true));
    assert!(!is_array_valid(&json!([]), false));

    for version in [UuidVersion::V4, UuidVersion::V7] {
        let id = generate_uuid(version);
        assert!(is_uuid_valid(&id, version), "{id}");
    }
    assert!(!is_uuid_valid(&generate_uuid(UuidVersion::V4), UuidVersion::V7));
}
