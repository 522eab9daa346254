//! Retry schedules: the ordered delays to wait between attempts

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::serde::durations_secs;

/// Errors raised while loading a [`RetrySchedule`]
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The TOML document could not be parsed or has the wrong shape
    #[error("Invalid retry schedule: {0}")]
    Parse(#[from] toml::de::Error),

    /// A delay was negative or not a finite number
    #[error("Invalid retry delay: {0} seconds")]
    InvalidDelay(f64),
}

/// Ordered list of delays between attempts
///
/// A schedule with `n` delays allows at most `n + 1` attempts. Delays are
/// written in seconds when (de)serialized:
///
/// ```
/// # #[cfg(feature = "runtime")]
/// # {
/// use std::time::Duration;
///
/// use primkit_common::resilience::RetrySchedule;
///
/// let schedule = RetrySchedule::from_toml_str("delays = [1, 2.5]").unwrap();
/// assert_eq!(schedule.delays, vec![Duration::from_secs(1), Duration::from_millis(2500)]);
/// assert_eq!(schedule.max_attempts(), 3);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySchedule {
    #[serde(with = "durations_secs", default)]
    pub delays: Vec<Duration>,
}

impl Default for RetrySchedule {
    /// Wait 3 seconds, then 5 seconds
    fn default() -> Self {
        Self { delays: vec![Duration::from_secs(3), Duration::from_secs(5)] }
    }
}

impl RetrySchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }

    /// A single attempt with no retries
    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    /// Build from delays in seconds
    pub fn from_secs(delays: &[f64]) -> Result<Self, ScheduleError> {
        delays
            .iter()
            .map(|&secs| {
                Duration::try_from_secs_f64(secs).map_err(|_| ScheduleError::InvalidDelay(secs))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Parse a TOML document of the form `delays = [3, 5]`
    pub fn from_toml_str(source: &str) -> Result<Self, ScheduleError> {
        Ok(toml::from_str(source)?)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Maximum number of attempts this schedule allows
    pub fn max_attempts(&self) -> usize {
        self.delays.len() + 1
    }

    /// Sum of every delay
    pub fn total_delay(&self) -> Duration {
        self.delays.iter().sum()
    }

    /// Delay to wait after the given failed attempt (0-based)
    pub fn delay_after(&self, attempt: usize) -> Option<Duration> {
        self.delays.get(attempt).copied()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for resilience::schedule.
    use super::*;

    /// Validates the default schedule.
    ///
    /// Assertions:
    /// - Ensures the delays are 3s then 5s.
    /// - Ensures three attempts are allowed.
    #[test]
    fn test_default_schedule() {
        let schedule = RetrySchedule::default();
        assert_eq!(schedule.delays, vec![Duration::from_secs(3), Duration::from_secs(5)]);
        assert_eq!(schedule.max_attempts(), 3);
        assert_eq!(schedule.total_delay(), Duration::from_secs(8));
        assert_eq!(schedule.delay_after(1), Some(Duration::from_secs(5)));
        assert_eq!(schedule.delay_after(2), None);
    }

    /// Validates `from_secs` accepts fractions and rejects bad delays.
    #[test]
    fn test_from_secs() {
        let schedule = RetrySchedule::from_secs(&[0.5, 0.0]).unwrap();
        assert_eq!(schedule.delays, vec![Duration::from_millis(500), Duration::ZERO]);

        assert!(matches!(
            RetrySchedule::from_secs(&[-1.0]),
            Err(ScheduleError::InvalidDelay(secs)) if secs == -1.0
        ));
        assert!(RetrySchedule::from_secs(&[f64::NAN]).is_err());
    }

    /// Validates TOML loading and rendering.
    ///
    /// Assertions:
    /// - Ensures a missing `delays` key yields an empty schedule.
    /// - Ensures malformed documents are rejected.
    #[test]
    fn test_toml_round_trip() {
        let schedule = RetrySchedule::from_toml_str("delays = [3, 5]").unwrap();
        assert_eq!(schedule, RetrySchedule::default());

        let rendered = schedule.to_toml_string().unwrap();
        assert_eq!(RetrySchedule::from_toml_str(&rendered).unwrap(), schedule);

        assert_eq!(RetrySchedule::from_toml_str("").unwrap(), RetrySchedule::none());
        assert!(RetrySchedule::from_toml_str("delays = \"soon\"").is_err());
        assert!(RetrySchedule::from_toml_str("delays = [-2]").is_err());
    }
}
