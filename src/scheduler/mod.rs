//! Round-robin schedule generation.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` pairs competitors with the circle method and lays
//! the resulting matches onto the court/time-slot grid in production order.
//! It is a single pass with no search: conflicts are left for
//! [`crate::validation::validate`] to report.
//!
//! # Identity
//!
//! Match ids come from an [`IdGenerator`]. [`RandomIds`] is the default;
//! [`SequentialIds`] gives reproducible ids.
//!
//! # References
//!
//! - Lucas (1883), "Récréations mathématiques", Vol. 2
//! - de Werra (1981), "Scheduling in Sports"

mod generator;
mod ids;
pub mod round_robin;

pub use generator::{generate, ScheduleGenerator};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
