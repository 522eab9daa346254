//! Date formatting templates
//!
//! Every template renders in en-US style with a 12-hour clock, e.g.
//! `date-medium` gives `July 11, 2019` and `time-short` gives `03:33 PM`.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{UtilError, UtilResult};

/// Named date/time layouts accepted by [`prettify_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateTemplate {
    /// `07/11/2019`
    DateShort,
    /// `July 11, 2019`
    DateMedium,
    /// `Thursday, July 11, 2019`
    DateLong,
    /// `03:33 PM`
    TimeShort,
    /// `03:33:16 PM`
    TimeMedium,
    /// `07/11/2019, 03:33 PM`
    DatetimeShort,
    /// `July 11, 2019 at 03:33 PM`
    #[default]
    DatetimeMedium,
    /// `Thursday, July 11, 2019 at 03:33:16 PM`
    DatetimeLong,
}

crate::impl_label_conversions!(DateTemplate {
    DateShort => "date-short",
    DateMedium => "date-medium",
    DateLong => "date-long",
    TimeShort => "time-short",
    TimeMedium => "time-medium",
    DatetimeShort => "datetime-short",
    DatetimeMedium => "datetime-medium",
    DatetimeLong => "datetime-long",
});

impl DateTemplate {
    /// All templates in declaration order
    pub const ALL: [DateTemplate; 8] = [
        Self::DateShort,
        Self::DateMedium,
        Self::DateLong,
        Self::TimeShort,
        Self::TimeMedium,
        Self::DatetimeShort,
        Self::DatetimeMedium,
        Self::DatetimeLong,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Self::DateShort => "%m/%d/%Y",
            Self::DateMedium => "%B %-d, %Y",
            Self::DateLong => "%A, %B %-d, %Y",
            Self::TimeShort => "%I:%M %p",
            Self::TimeMedium => "%I:%M:%S %p",
            Self::DatetimeShort => "%m/%-d/%Y, %I:%M %p",
            Self::DatetimeMedium => "%B %-d, %Y at %I:%M %p",
            Self::DatetimeLong => "%A, %B %-d, %Y at %I:%M:%S %p",
        }
    }
}

/// Render a date in the time zone it carries
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use chrono::{TimeZone, Utc};
/// use primkit_common::transform::{prettify_date, DateTemplate};
///
/// let date = Utc.with_ymd_and_hms(2019, 7, 11, 15, 33, 16).unwrap();
/// assert_eq!(prettify_date(&date, DateTemplate::DateMedium), "July 11, 2019");
/// assert_eq!(prettify_date(&date, DateTemplate::TimeShort), "03:33 PM");
/// # }
/// ```
pub fn prettify_date<Tz>(date: &DateTime<Tz>, template: DateTemplate) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(template.pattern()).to_string()
}

/// Render a millisecond unix timestamp in UTC
pub fn prettify_timestamp(timestamp_ms: i64, template: DateTemplate) -> UtilResult<String> {
    let date = Utc.timestamp_millis_opt(timestamp_ms).single().ok_or_else(|| {
        UtilError::unsupported_data_type(format!(
            "The timestamp {timestamp_ms} is outside the supported date range."
        ))
    })?;
    Ok(prettify_date(&date, template))
}
