//! Locale-style number formatting
//!
//! Numbers render in en-US style: `,` groups thousands and `.` separates
//! the fraction.

use serde::{Deserialize, Serialize};

/// Options for [`prettify_number`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormatConfig {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub prefix: String,
    pub suffix: String,
}

impl Default for NumberFormatConfig {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 2,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl NumberFormatConfig {
    /// Fixed number of fraction digits
    pub fn decimals(places: usize) -> Self {
        Self { minimum_fraction_digits: places, maximum_fraction_digits: places, ..Self::default() }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_fraction_digits(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }
}

/// Partial overrides accepted by [`build_number_format_config`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialNumberFormatConfig {
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Fill the gaps of a partial config with the defaults (0/2 fraction digits,
/// no prefix or suffix)
pub fn build_number_format_config(config: Option<PartialNumberFormatConfig>) -> NumberFormatConfig {
    let config = config.unwrap_or_default();
    let defaults = NumberFormatConfig::default();
    NumberFormatConfig {
        minimum_fraction_digits: config
            .minimum_fraction_digits
            .unwrap_or(defaults.minimum_fraction_digits),
        maximum_fraction_digits: config
            .maximum_fraction_digits
            .unwrap_or(defaults.maximum_fraction_digits),
        prefix: config.prefix.unwrap_or(defaults.prefix),
        suffix: config.suffix.unwrap_or(defaults.suffix),
    }
}

/// Format a number with thousands grouping and bounded fraction digits
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::transform::{prettify_number, NumberFormatConfig};
///
/// assert_eq!(prettify_number(1000.58, &NumberFormatConfig::default()), "1,000.58");
/// assert_eq!(prettify_number(1000.0, &NumberFormatConfig::default()), "1,000");
/// assert_eq!(
///     prettify_number(1000.58, &NumberFormatConfig::decimals(2).with_prefix("$")),
///     "$1,000.58"
/// );
/// # }
/// ```
pub fn prettify_number(value: f64, config: &NumberFormatConfig) -> String {
    format!("{}{}{}", config.prefix, format_grouped(value, config), config.suffix)
}

fn format_grouped(value: f64, config: &NumberFormatConfig) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let maximum = config.maximum_fraction_digits.max(config.minimum_fraction_digits);
    let fixed = to_fixed(value.abs(), maximum);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > config.minimum_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(integer))
    } else {
        format!("{sign}{}.{fraction}", group_thousands(integer))
    }
}

// Rounds the shortest round-trip decimal form half away from zero, so
// `1.005` keeps its written digits and gives `1.01` at two places.
fn to_fixed(abs: f64, places: usize) -> String {
    let shortest = abs.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<char> = integer.chars().chain(fraction.chars().take(places)).collect();
    digits.extend(std::iter::repeat('0').take(places.saturating_sub(fraction.len())));

    if fraction.as_bytes().get(places).is_some_and(|&next| next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let split = digits.len() - places;
    let integer: String = digits[..split].iter().collect();
    if places == 0 {
        integer
    } else {
        let fraction: String = digits[split..].iter().collect();
        format!("{integer}.{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
