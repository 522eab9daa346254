//! Identifier and random value generators

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::error::{UtilError, UtilResult};
use crate::validation::UuidVersion;

/// Characters used by [`generate_random_string`] when no alphabet is given
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a hyphenated UUID of the requested version
pub fn generate_uuid(version: UuidVersion) -> String {
    match version {
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V7 => Uuid::now_v7(),
    }
    .to_string()
}

/// Generate `length` characters picked uniformly from `alphabet`
///
/// An empty alphabet yields an empty string.
pub fn generate_random_string(length: usize, alphabet: Option<&str>) -> String {
    let alphabet: Vec<char> = alphabet.unwrap_or(DEFAULT_ALPHABET).chars().collect();
    let mut rng = rand::thread_rng();
    (0..length).filter_map(|_| alphabet.choose(&mut rng).copied()).collect()
}

/// Random float in the inclusive range `[min, max]`
///
/// Reversed bounds are swapped. Any pair of finite bounds is accepted, even
/// when their distance overflows `f64`.
pub fn generate_random_float(min: f64, max: f64) -> UtilResult<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(UtilError::unsupported_data_type(format!(
            "The range bounds must be finite numbers. Received: {min}, {max}"
        )));
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let mut rng = rand::thread_rng();
    if (high - low).is_finite() {
        return Ok(rng.gen_range(low..=high));
    }

    // Width overflows: interpolate so no intermediate leaves the f64 range
    let t: f64 = rng.gen_range(0.0..=1.0);
    Ok((low * (1.0 - t) + high * t).clamp(low, high))
}

/// Random integer in the inclusive range `[min, max]`
///
/// Reversed bounds are swapped.
pub fn generate_random_integer(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// Arithmetic sequence from `start` to `stop` (inclusive) in `step` increments
///
/// A non-positive step or `start > stop` yields an empty sequence.
pub fn generate_sequence(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let Ok(step) = usize::try_from(step) else {
        return Vec::new();
    };
    if step == 0 {
        return Vec::new();
    }
    (start..=stop).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    //! Unit tests for utils::generators.
    use std::collections::HashSet;

    use super::*;
    use crate::validation::{is_integer_valid, is_uuid_valid};

    /// Validates `generate_uuid` output for both versions.
    ///
    /// Assertions:
    /// - Ensures every id is 36 chars and passes the version check.
    /// - Ensures ids are unique.
    #[test]
    fn test_generate_uuid_versions() {
        for version in [UuidVersion::V4, UuidVersion::V7] {
            let ids: HashSet<String> = (0..15).map(|_| generate_uuid(version)).collect();
            assert_eq!(ids.len(), 15);
            for id in ids {
                assert_eq!(id.len(), 36);
                assert!(is_uuid_valid(&id, version), "{id} should be {version}");
            }
        }
    }

    /// Validates `generate_random_string` lengths and alphabets.
    #[test]
    fn test_generate_random_string() {
        for length in [5, 15, 35, 75, 100] {
            let text = generate_random_string(length, None);
            assert_eq!(text.chars().count(), length);
            assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
        }

        assert!(generate_random_string(100, Some("ABCDEFG")).chars().all(|c| "ABCDEFG".contains(c)));
        assert!(generate_random_string(100, Some("0123456789")).chars().all(|c| c.is_ascii_digit()));
        assert_eq!(generate_random_string(10, Some("")), "");
    }

    /// Validates random numbers stay in range.
    ///
    /// Assertions:
    /// - Ensures floats and integers fall within inclusive bounds.
    /// - Ensures non-finite float bounds are rejected.
    #[test]
    fn test_generate_random_numbers_in_range() {
        let ranges = [(1, 10), (100, 1000), (-100, 10000), (76, 9885), (-5112, -11)];
        for (min, max) in ranges {
            let float = generate_random_float(min as f64, max as f64).unwrap();
            assert!((min as f64..=max as f64).contains(&float));

            let int = generate_random_integer(min, max);
            assert!((min..=max).contains(&int));
            assert!(is_integer_valid(int as f64, None, None));
        }

        assert_eq!(generate_random_integer(5, 5), 5);
        assert!((1..=10).contains(&generate_random_integer(10, 1)));
        assert!(generate_random_float(f64::NAN, 1.0).is_err());
    }

    /// Validates ranges wider than `f64::MAX`.
    ///
    /// Assertions:
    /// - Ensures the full finite range yields a finite value instead of
    /// panicking.
    /// - Ensures reversed wide bounds behave the same.
    #[test]
    fn test_generate_random_float_full_range() {
        for (min, max) in [(-f64::MAX, f64::MAX), (f64::MAX, -f64::MAX), (-f64::MAX, 1.0e308)] {
            for _ in 0..64 {
                let float = generate_random_float(min, max).unwrap();
                assert!(float.is_finite());
                assert!((min.min(max)..=min.max(max)).contains(&float));
            }
        }
    }

    #[test]
    fn test_generate_sequence() {
        assert_eq!(generate_sequence(1, 5, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(generate_sequence(0, 10, 5), vec![0, 5, 10]);
        assert_eq!(generate_sequence(0, 9, 5), vec![0, 5]);
        assert_eq!(generate_sequence(-2, 2, 2), vec![-2, 0, 2]);
        assert!(generate_sequence(0, 10, 0).is_empty());
        assert!(generate_sequence(0, 10, -1).is_empty());
        assert!(generate_sequence(5, 1, 1).is_empty());
    }
}
