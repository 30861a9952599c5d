//! Time-of-day helpers.
//!
//! Start times are wall-clock times of day (`chrono::NaiveTime`). Their
//! textual form is `HH:MM`; `HH:MM:SS` is also accepted when parsing.
//! Comparisons always go through `NaiveTime`, never through strings, so
//! `9:30` sorts before `10:00`.

use chrono::NaiveTime;

use crate::error::{Result, ScheduleError};

const CLOCK_FORMAT: &str = "%H:%M";
const CLOCK_FORMAT_SECONDS: &str = "%H:%M:%S";

/// Parses an `HH:MM` (or `HH:MM:SS`) time of day.
///
/// Surrounding whitespace is ignored. Single-digit hours (`9:30`) parse.
pub fn parse_clock(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT_SECONDS))
        .map_err(|_| ScheduleError::InvalidTime(text.to_string()))
}

/// Formats a time of day as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Signed number of minutes from `from` to `to` on the same day.
#[inline]
pub fn minutes_between(from: NaiveTime, to: NaiveTime) -> i64 {
    to.signed_duration_since(from).num_minutes()
}

/// Serde adapter for a single `HH:MM` time of day.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_clock(&text).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for a list of `HH:MM` times of day.
pub mod hhmm_list {
    use chrono::NaiveTime;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(times: &[NaiveTime], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(times.len()))?;
        for time in times {
            seq.serialize_element(&super::format_clock(*time))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<NaiveTime>, D::Error> {
        let texts = Vec::<String>::deserialize(deserializer)?;
        texts
            .iter()
            .map(|t| super::parse_clock(t).map_err(serde::de::Error::custom))
            .collect()
    }
}
