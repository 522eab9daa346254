//! Serde helpers for durations written as (fractional) seconds
//!
//! Configuration files express delays the way people think about them:
//! `delays = [3, 5]` or `delay = 0.25`.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Serde serialization result type
type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

fn secs_to_duration<E: serde::de::Error>(secs: f64) -> Result<Duration, E> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| E::custom(format!("invalid duration of {secs} seconds")))
}

/// A single `Duration` as seconds (`f64`)
///
/// ```rust
/// # #[cfg(feature = "foundation")]
/// # {
/// use std::time::Duration;
///
/// use primkit_common::duration_secs;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "duration_secs")]
///     timeout: Duration,
/// }
///
/// let parsed: Example = serde_json::from_str(r#"{"timeout":0.25}"#).unwrap();
/// assert_eq!(parsed.timeout, Duration::from_millis(250));
/// # }
/// ```
pub mod duration_secs {
    use super::*;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        secs_to_duration(f64::deserialize(deserializer)?)
    }
}

/// A list of `Duration`s as seconds (`[f64]`)
pub mod durations_secs {
    use serde::ser::SerializeSeq;

    use super::*;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(durations.len()))?;
        for duration in durations {
            seq.serialize_element(&duration.as_secs_f64())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<f64>::deserialize(deserializer)?
            .into_iter()
            .map(secs_to_duration::<D::Error>)
            .collect()
    }
}
