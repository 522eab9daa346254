//! Byte sizes and badge counters

/// Bytes per unit step
pub const FILE_SIZE_THRESHOLD: u64 = 1024;

/// Units used once a size reaches [`FILE_SIZE_THRESHOLD`] bytes
pub const FILE_SIZE_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with a binary (1024) step
///
/// The unit is chosen so that the rounded mantissa stays below 1024, capped at
/// `YB`. Sizes under 1024 are printed as plain bytes.
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::transform::prettify_file_size;
///
/// assert_eq!(prettify_file_size(0, 2), "0 B");
/// assert_eq!(prettify_file_size(1000, 2), "1000 B");
/// assert_eq!(prettify_file_size(2785, 2), "2.72 kB");
/// # }
/// ```
pub fn prettify_file_size(bytes: u64, decimal_places: usize) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    if bytes < FILE_SIZE_THRESHOLD {
        return format!("{bytes} B");
    }

    let threshold = FILE_SIZE_THRESHOLD as f64;
    let scale = 10_f64.powi(i32::try_from(decimal_places).unwrap_or(i32::MAX));
    let mut value = bytes as f64;
    let mut unit = 0;

    value /= threshold;
    while (value * scale).round() / scale >= threshold && unit < FILE_SIZE_UNITS.len() - 1 {
        value /= threshold;
        unit += 1;
    }

    format!("{value:.decimal_places$} {}", FILE_SIZE_UNITS[unit])
}

/// Format a notification counter, collapsing anything above `max` to `"{max}+"`
///
/// Zero renders as an empty string so the badge can be hidden.
pub fn prettify_badge_count(count: u64, max: u64) -> String {
    match count {
        0 => String::new(),
        n if n > max => format!("{max}+"),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for transform::size.
    use super::*;

    /// Validates `prettify_file_size` against known byte counts.
    ///
    /// Assertions:
    /// - Ensures unit selection and decimal places match the table.
    #[test]
    fn test_prettify_file_size_table() {
        let cases = [
            (1000, 2, "1000 B"),
            (2785, 2, "2.72 kB"),
            (85_545, 6, "83.540039 kB"),
            (977_615, 1, "954.7 kB"),
            (1_211_423, 2, "1.16 MB"),
            (79_551_423, 2, "75.87 MB"),
            (99_479_551_423, 2, "92.65 GB"),
            (9_007_199_254_740_991, 2, "8.00 PB"),
        ];

        for (bytes, places, expected) in cases {
            assert_eq!(prettify_file_size(bytes, places), expected, "bytes {bytes}");
        }
    }

    /// Validates boundaries around the threshold.
    ///
    /// Assertions:
    /// - Ensures 1023 stays in bytes and 1024 switches to kB.
    /// - Ensures a value that rounds up to 1024 moves to the next unit.
    /// - Ensures the largest input stays in the last available unit.
    #[test]
    fn test_prettify_file_size_boundaries() {
        assert_eq!(prettify_file_size(0, 2), "0 B");
        assert_eq!(prettify_file_size(1, 2), "1 B");
        assert_eq!(prettify_file_size(1023, 2), "1023 B");
        assert_eq!(prettify_file_size(1024, 2), "1.00 kB");
        assert_eq!(prettify_file_size(1024 * 1024 - 1, 2), "1.00 MB");
        assert_eq!(prettify_file_size(1024 * 1024 - 1, 0), "1 MB");
        assert_eq!(prettify_file_size(u64::MAX, 2), "16.00 EB");
    }

    /// Validates `prettify_badge_count` collapsing.
    #[test]
    fn test_prettify_badge_count() {
        assert_eq!(prettify_badge_count(0, 9), "");
        assert_eq!(prettify_badge_count(1, 9), "1");
        assert_eq!(prettify_badge_count(9, 9), "9");
        assert_eq!(prettify_badge_count(10, 9), "9+");
        assert_eq!(prettify_badge_count(1500, 99), "99+");
    }
}
