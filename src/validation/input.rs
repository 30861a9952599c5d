//! Structural integrity checks on tournament data.
//!
//! Detects:
//! - Duplicate competitor, court, time slot and match IDs
//! - Matches referencing unknown competitors, courts or time slots
//! - Matches pairing a competitor with itself
//! - Matches whose copied day/start time disagree with their slot
//! - Time slots of a day that are not sorted by start time
//!
//! These are data defects, unlike the scheduling conflicts reported by
//! [`super::validate`].

use std::collections::{HashMap, HashSet};

use crate::models::{Competitor, Court, Match, TimeSlot};

/// Input check result.
pub type InputResult = Result<(), Vec<InputError>>;

/// An input defect.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input defects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A match references a competitor that is not in the roster.
    UnknownCompetitor,
    /// A match references a court that doesn't exist.
    UnknownCourt,
    /// A match references a time slot that doesn't exist.
    UnknownTimeSlot,
    /// Both sides of a match are the same competitor.
    SelfPairing,
    /// A match's day/start time differ from its time slot.
    StalePlacement,
    /// A day's time slots are not in start-time order.
    UnsortedTimeSlots,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks roster, grid and matches for structural defects.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    competitors: &[Competitor],
    courts: &[Court],
    time_slots: &[TimeSlot],
    matches: &[Match],
) -> InputResult {
    let mut errors = Vec::new();

    let competitor_ids = collect_ids(
        competitors.iter().map(|c| c.id.as_str()),
        "competitor",
        &mut errors,
    );
    let court_ids = collect_ids(courts.iter().map(|c| c.id.as_str()), "court", &mut errors);
    collect_ids(matches.iter().map(|m| m.id.as_str()), "match", &mut errors);

    let mut slots_by_id: HashMap<&str, &TimeSlot> = HashMap::new();
    for slot in time_slots {
        if slots_by_id.insert(slot.id.as_str(), slot).is_some() {
            errors.push(InputError::new(
                InputErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", slot.id),
            ));
        }
    }

    check_slot_order(time_slots, &mut errors);

    for m in matches {
        if m.side_a == m.side_b {
            errors.push(InputError::new(
                InputErrorKind::SelfPairing,
                format!("Match '{}' pairs '{}' with itself", m.id, m.side_a),
            ));
        }

        for side in m.sides() {
            if !competitor_ids.contains(side) {
                errors.push(InputError::new(
                    InputErrorKind::UnknownCompetitor,
                    format!("Match '{}' references unknown competitor '{}'", m.id, side),
                ));
            }
        }

        if !court_ids.contains(m.court_id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::UnknownCourt,
                format!("Match '{}' references unknown court '{}'", m.id, m.court_id),
            ));
        }

        match slots_by_id.get(m.time_slot_id.as_str()) {
            None => errors.push(InputError::new(
                InputErrorKind::UnknownTimeSlot,
                format!("Match '{}' references unknown time slot '{}'", m.id, m.time_slot_id),
            )),
            Some(slot) if slot.day != m.day || slot.start_time != m.start_time => {
                errors.push(InputError::new(
                    InputErrorKind::StalePlacement,
                    format!(
                        "Match '{}' is out of sync with time slot '{}'",
                        m.id, m.time_slot_id
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<InputError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}

/// Slots of the same day must appear in non-decreasing start-time order.
fn check_slot_order(time_slots: &[TimeSlot], errors: &mut Vec<InputError>) {
    let mut last_start: HashMap<u32, &TimeSlot> = HashMap::new();
    for slot in time_slots {
        if let Some(prev) = last_start.get(&slot.day) {
            if slot.start_time < prev.start_time {
                errors.push(InputError::new(
                    InputErrorKind::UnsortedTimeSlots,
                    format!(
                        "Time slot '{}' starts before '{}' on day {}",
                        slot.id, prev.id, slot.day
                    ),
                ));
            }
        }
        last_start.insert(slot.day, slot);
    }
}
