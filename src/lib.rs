//! Round-robin tournament scheduling for the U-Engine ecosystem.
//!
//! Pairs competitors into matches, lays them onto a grid of courts and
//! time slots, and reports scheduling conflicts in the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Competitor`, `Court`, `TimeSlot`,
//!   `Match`, `Violation`
//! - **`config`**: `ScheduleConfig` (core input) and `TournamentSettings`
//!   (organizer setup, JSON-loadable)
//! - **`scheduler`**: Circle-method pairing and grid placement
//! - **`validation`**: Conflict detection (double-booking, rest) and input
//!   integrity checks
//! - **`io`**: Roster CSV import, schedule CSV export
//! - **`tournament`**: Caller-owned state tying it all together
//!
//! # Architecture
//!
//! Generation and validation are pure synchronous functions. Generation
//! never avoids conflicts; validation never rejects a schedule. Conflicts
//! are data (`Violation`), not errors.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod tournament;
pub mod validation;

pub use config::{ScheduleConfig, TournamentSettings};
pub use error::{Result, ScheduleError};
pub use scheduler::{generate, ScheduleGenerator};
pub use tournament::Tournament;
pub use validation::validate;
