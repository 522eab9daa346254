//! Macros for reducing boilerplate code

/// Implements `Display` and `FromStr` for fieldless enums that have a fixed
/// textual label per variant
///
/// - `Display` writes the label.
/// - `FromStr` matches labels case-insensitively and fails with
///   `"Invalid <Enum>: <input>"`.
///
/// Labels must be lowercase for parsing to round-trip.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "foundation")]
/// # {
/// use primkit_common::impl_label_conversions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Unit {
///     Kilobyte,
///     Megabyte,
/// }
///
/// impl_label_conversions!(Unit {
///     Kilobyte => "kb",
///     Megabyte => "mb",
/// });
///
/// assert_eq!(Unit::Kilobyte.to_string(), "kb");
/// assert_eq!("MB".parse::<Unit>(), Ok(Unit::Megabyte));
/// # }
/// ```
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
