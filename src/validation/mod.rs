//! Schedule validation.
//!
//! - [`validate`]: scheduling conflicts in a match set (competitor
//!   double-booking, insufficient rest). Conflicts are reported as
//!   [`Violation`](crate::models::Violation)s, never as errors.
//! - [`validate_input`]: structural defects in the data itself (duplicate
//!   IDs, dangling references, unsorted time slots).

mod conflicts;
mod input;

pub use conflicts::{sort_violations, validate};
pub use input::{validate_input, InputError, InputErrorKind, InputResult};
