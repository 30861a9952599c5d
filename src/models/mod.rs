//! Tournament domain models.
//!
//! Provides the data types exchanged between the generator, the validator
//! and the caller.
//!
//! # Domain Mappings
//!
//! | u-tournament | Basketball | Tennis | Esports |
//! |--------------|------------|--------|---------|
//! | Competitor | Team | Player/Pair | Team |
//! | Court | Court | Court | Server/Station |
//! | TimeSlot | Tip-off time | Session | Round window |
//! | Match | Game | Match | Series |

pub mod clock;
mod competitor;
mod fixture;
mod grid;
mod violation;

pub use competitor::{competitor_name, Competitor};
pub use fixture::{Match, MatchStatus, Score};
pub use grid::{Court, TimeSlot};
pub use violation::{Severity, Violation, ViolationKind};
