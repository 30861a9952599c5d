//! Scheduling violation model.
//!
//! A violation is a reported fact about a match set, never an error.
//! Schedules with `Error`-severity violations are still valid data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected scheduling rule breach.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub kind: ViolationKind,
    /// The match the violation is reported against.
    pub match_id: String,
    /// The competitor whose availability is breached.
    pub competitor_id: String,
    /// The other match involved (colliding match, or the preceding match
    /// for a rest violation).
    pub related_match_id: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Correctness weight.
    pub severity: Severity,
}

/// Classification of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A competitor is placed in more than one match in the same time slot.
    CompetitorDoubleBooked,
    /// Two consecutive same-day matches of a competitor leave less than the
    /// minimum rest between them.
    InsufficientRest,
}

/// Violation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Undesirable but playable.
    Warning,
    /// The schedule cannot be played as placed.
    Error,
}

impl Violation {
    /// Creates a double-booking violation (severity `Error`).
    pub fn double_booked(
        match_id: impl Into<String>,
        competitor_id: impl Into<String>,
        colliding_match_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: ViolationKind::CompetitorDoubleBooked,
            match_id: match_id.into(),
            competitor_id: competitor_id.into(),
            related_match_id: Some(colliding_match_id.into()),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    /// Creates an insufficient-rest violation (severity `Warning`).
    ///
    /// `match_id` is the later of the two matches.
    pub fn insufficient_rest(
        match_id: impl Into<String>,
        competitor_id: impl Into<String>,
        previous_match_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: ViolationKind::InsufficientRest,
            match_id: match_id.into(),
            competitor_id: competitor_id.into(),
            related_match_id: Some(previous_match_id.into()),
            description: description.into(),
            severity: Severity::Warning,
        }
    }

    /// Whether this violation has `Error` severity.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl ViolationKind {
    /// Kebab-case label (`competitor-double-booked`, `insufficient-rest`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::CompetitorDoubleBooked => "competitor-double-booked",
            ViolationKind::InsufficientRest => "insufficient-rest",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {} ({}): {}", self.severity, self.kind, self.match_id, self.description)
    }
}
