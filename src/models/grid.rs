//! Resource grid: courts and time slots.
//!
//! Courts are parallel lanes; time slots are shared by all courts. A match
//! placement is one (time slot, court) cell of the grid.
//!
//! # Ordering
//! Within a day, time slots are sorted by start time. The generator walks
//! slots in the given order and the validator relies on start times, so
//! [`TimeSlot::grid`] always emits sorted slots.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock;

/// A court: one parallel resource lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    /// Unique court identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Venue or gym, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A fixed start time and duration on one day, shared by all courts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Tournament day (1-based).
    pub day: u32,
    /// Wall-clock start time.
    #[serde(with = "clock::hhmm")]
    pub start_time: NaiveTime,
    /// Slot length in minutes.
    pub duration_minutes: u32,
}

impl Court {
    /// Creates a court.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builds `count` courts named `Court 1` .. `Court N` with ids
    /// `court-1` .. `court-N`.
    pub fn numbered(count: usize) -> Vec<Court> {
        (1..=count)
            .map(|i| Court::new(format!("court-{i}"), format!("Court {i}")))
            .collect()
    }
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(id: impl Into<String>, day: u32, start_time: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            day,
            start_time,
            duration_minutes,
        }
    }

    /// Wall-clock end time (`start_time + duration`).
    #[inline]
    pub fn end_time(&self) -> NaiveTime {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Builds the slots for `days` days, one per start time per day.
    ///
    /// Start times are sorted (and deduplicated) first, so the result is
    /// ordered by `(day, start_time)`. Ids are `day{d}-slot{i}` where `i`
    /// is the 0-based index within the day.
    pub fn grid(start_times: &[NaiveTime], days: u32, duration_minutes: u32) -> Vec<TimeSlot> {
        let mut times = start_times.to_vec();
        times.sort();
        times.dedup();

        let mut slots = Vec::with_capacity(times.len() * days as usize);
        for day in 1..=days {
            for (idx, &start) in times.iter().enumerate() {
                slots.push(TimeSlot::new(
                    format!("day{day}-slot{idx}"),
                    day,
                    start,
                    duration_minutes,
                ));
            }
        }
        slots
    }
}
