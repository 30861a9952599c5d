//! CSV import and export.
//!
//! - [`import_roster`]: competitors from a spreadsheet export.
//! - [`export_schedule`]: one row per match with resolved names.

mod export;
mod roster;

pub use export::{export_schedule, export_schedule_string, SCHEDULE_HEADER};
pub use roster::{import_roster, import_roster_into};
