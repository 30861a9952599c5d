//! Match model.
//!
//! A match pairs two competitors at one (time slot, court) placement.
//! `day` and `start_time` are copied from the referenced time slot so the
//! validator can order matches without a slot lookup; [`Match::reassign`]
//! keeps them in sync when the placement changes.

use std::fmt;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock;
use super::{Court, TimeSlot};

/// A scheduled contest between two competitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique match identifier.
    pub id: String,
    /// First (home) competitor id.
    pub side_a: String,
    /// Second (away) competitor id.
    pub side_b: String,
    /// Assigned court id.
    pub court_id: String,
    /// Assigned time slot id.
    pub time_slot_id: String,
    /// Day of the assigned slot.
    pub day: u32,
    /// Start time of the assigned slot.
    #[serde(with = "clock::hhmm")]
    pub start_time: NaiveTime,
    /// Match length in minutes.
    pub duration_minutes: u32,
    /// Lifecycle status.
    pub status: MatchStatus,
    /// Final or running score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

/// Match lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    /// Placed on the grid, not started.
    #[default]
    Scheduled,
    /// Currently being played.
    InProgress,
    /// Finished.
    Completed,
}

/// Points for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Points for `side_a`.
    pub home: u32,
    /// Points for `side_b`.
    pub away: u32,
}

impl Match {
    /// Creates a scheduled match at the given placement.
    ///
    /// `day` and `start_time` are taken from `slot`.
    pub fn new(
        id: impl Into<String>,
        side_a: impl Into<String>,
        side_b: impl Into<String>,
        court: &Court,
        slot: &TimeSlot,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            side_a: side_a.into(),
            side_b: side_b.into(),
            court_id: court.id.clone(),
            time_slot_id: slot.id.clone(),
            day: slot.day,
            start_time: slot.start_time,
            duration_minutes,
            status: MatchStatus::Scheduled,
            score: None,
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the score.
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.score = Some(Score { home, away });
        self
    }

    /// Whether the competitor plays in this match.
    #[inline]
    pub fn involves(&self, competitor_id: &str) -> bool {
        self.side_a == competitor_id || self.side_b == competitor_id
    }

    /// The other side, if `competitor_id` plays in this match.
    pub fn opponent_of(&self, competitor_id: &str) -> Option<&str> {
        if self.side_a == competitor_id {
            Some(self.side_b.as_str())
        } else if self.side_b == competitor_id {
            Some(self.side_a.as_str())
        } else {
            None
        }
    }

    /// Both side ids.
    #[inline]
    pub fn sides(&self) -> [&str; 2] {
        [self.side_a.as_str(), self.side_b.as_str()]
    }

    /// Wall-clock end time (`start_time + duration`).
    #[inline]
    pub fn end_time(&self) -> NaiveTime {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Moves the match to a new placement, re-syncing `day` and `start_time`.
    pub fn reassign(&mut self, court: &Court, slot: &TimeSlot) {
        self.court_id = court.id.clone();
        self.time_slot_id = slot.id.clone();
        self.day = slot.day;
        self.start_time = slot.start_time;
    }
}

impl MatchStatus {
    /// Lowercase label used in exports (`scheduled`, `in-progress`, `completed`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in-progress",
            MatchStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::parse_clock;

    fn slot(id: &str, day: u32, start: &str) -> TimeSlot {
        TimeSlot::new(id, day, parse_clock(start).unwrap(), 45)
    }

    #[test]
    fn test_new_copies_slot_fields() {
        let court = Court::new("court-1", "Court 1");
        let m = Match::new("G1", "A", "B", &court, &slot("day1-slot2", 1, "11:00"), 45);

        assert_eq!(m.court_id, "court-1");
        assert_eq!(m.time_slot_id, "day1-slot2");
        assert_eq!(m.day, 1);
        assert_eq!(m.start_time, parse_clock("11:00").unwrap());
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.end_time(), parse_clock("11:45").unwrap());
    }

    #[test]
    fn test_reassign_keeps_denormalized_fields_in_sync() {
        let c1 = Court::new("court-1", "Court 1");
        let c2 = Court::new("court-2", "Court 2");
        let mut m = Match::new("G1", "A", "B", &c1, &slot("day1-slot0", 1, "09:00"), 45);

        m.reassign(&c2, &slot("day2-slot3", 2, "12:00"));

        assert_eq!(m.court_id, "court-2");
        assert_eq!(m.time_slot_id, "day2-slot3");
        assert_eq!(m.day, 2);
        assert_eq!(m.start_time, parse_clock("12:00").unwrap());
    }

    #[test]
    fn test_involves_and_opponent() {
        let court = Court::new("court-1", "Court 1");
        let m = Match::new("G1", "A", "B", &court, &slot("s", 1, "09:00"), 45);

        assert!(m.involves("A"));
        assert!(m.involves("B"));
        assert!(!m.involves("C"));
        assert_eq!(m.opponent_of("A"), Some("B"));
        assert_eq!(m.opponent_of("B"), Some("A"));
        assert_eq!(m.opponent_of("C"), None);
    }

    #[test]
    fn test_completed_match_json() {
        let court = Court::new("court-1", "Court 1");
        let m = Match::new("G1", "A", "B", &court, &slot("day1-slot0", 1, "09:00"), 45)
            .with_status(MatchStatus::Completed)
            .with_score(42, 38);

        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains(r#""start_time":"09:00""#));
        assert!(json.contains(r#""status":"completed""#));
        assert!(json.contains(r#""score":{"home":42,"away":38}"#));

        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MatchStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            serde_json::to_string(&MatchStatus::Completed).unwrap(),
            r#""completed""#
        );
    }
}
