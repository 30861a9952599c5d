//! Error types.
//!
//! Only caller contract violations and I/O failures are errors. Scheduling
//! conflicts are never errors: they are reported as
//! [`Violation`](crate::models::Violation)s by the validator.

use thiserror::Error;

/// Errors raised by schedule generation, orchestration and CSV/JSON I/O.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Fewer than two competitors were supplied to the generator.
    #[error("At least 2 competitors are required to build a schedule (found {found})")]
    InsufficientRoster {
        /// Number of competitors actually supplied.
        found: usize,
    },

    /// Two competitors share an id.
    #[error("Duplicate competitor id: {0}")]
    DuplicateCompetitor(String),

    /// A configuration field is outside its allowed range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The resource grid has no courts or no time slots.
    #[error("Resource grid is empty: at least one court and one time slot are required")]
    EmptyGrid,

    /// A time-of-day string could not be parsed.
    #[error("Invalid time of day '{0}' (expected HH:MM)")]
    InvalidTime(String),

    /// No match with the given id exists.
    #[error("Unknown match: {0}")]
    UnknownMatch(String),

    /// No court with the given id exists.
    #[error("Unknown court: {0}")]
    UnknownCourt(String),

    /// No time slot with the given id exists.
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed.
    #[error("Failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;
