//! Conflict detection on a match set.
//!
//! # Checks
//!
//! Matches are grouped by competitor (each match counts for both sides).
//! Within each group:
//! 1. **Double-booking**: matches sharing a time slot id. One `Error` per
//!    slot holding more than one of the competitor's matches.
//! 2. **Rest** (only with `avoid_back_to_back`): matches ordered by
//!    `(day, start_time)`; for adjacent same-day matches
//!    `gap = start(curr) - (start(prev) + duration(prev))`. One `Warning`
//!    against the later match when `gap < min_rest_between_games`.
//!
//! Court capacity is not checked: two different pairings on the same court
//! and slot are not a violation here.
//!
//! # Complexity
//! O(m log m) for m matches.

use std::collections::BTreeMap;

use log::debug;

use crate::config::ScheduleConfig;
use crate::models::clock::{format_clock, minutes_between};
use crate::models::{competitor_name, Competitor, Match, Violation};

/// Reports every double-booking and rest violation in `matches`.
///
/// Pure: inputs are not modified and repeated calls on the same inputs
/// return the same violations. Competitors are visited in id order, but
/// callers needing a presentation order should use [`sort_violations`].
pub fn validate(
    matches: &[Match],
    competitors: &[Competitor],
    config: &ScheduleConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (competitor_id, group) in group_by_competitor(matches) {
        let name = competitor_name(competitors, competitor_id).unwrap_or(competitor_id);

        check_double_booking(competitor_id, name, &group, &mut violations);
        if config.avoid_back_to_back {
            check_rest(
                competitor_id,
                name,
                group,
                config.min_rest_between_games,
                &mut violations,
            );
        }
    }

    debug!(
        "Validated {} matches: {} violations",
        matches.len(),
        violations.len()
    );
    violations
}

/// Sorts violations by `(kind, match_id, competitor_id)`.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(|a, b| {
        (a.kind, &a.match_id, &a.competitor_id).cmp(&(b.kind, &b.match_id, &b.competitor_id))
    });
}

fn group_by_competitor(matches: &[Match]) -> BTreeMap<&str, Vec<&Match>> {
    let mut groups: BTreeMap<&str, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        groups.entry(m.side_a.as_str()).or_default().push(m);
        if m.side_b != m.side_a {
            groups.entry(m.side_b.as_str()).or_default().push(m);
        }
    }
    groups
}

fn check_double_booking(
    competitor_id: &str,
    name: &str,
    group: &[&Match],
    violations: &mut Vec<Violation>,
) {
    let mut by_slot: BTreeMap<&str, Vec<&Match>> = BTreeMap::new();
    for &m in group {
        by_slot.entry(m.time_slot_id.as_str()).or_default().push(m);
    }

    for bucket in by_slot.values().filter(|b| b.len() > 1) {
        let first = bucket[0];
        let second = bucket[1];
        violations.push(Violation::double_booked(
            &second.id,
            competitor_id,
            &first.id,
            format!(
                "{name} is scheduled in {} matches at the same time (day {}, {})",
                bucket.len(),
                second.day,
                format_clock(second.start_time)
            ),
        ));
    }
}

fn check_rest(
    competitor_id: &str,
    name: &str,
    mut group: Vec<&Match>,
    min_rest: u32,
    violations: &mut Vec<Violation>,
) {
    group.sort_by_key(|m| (m.day, m.start_time));

    for pair in group.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if prev.day != curr.day {
            continue;
        }

        let gap = minutes_between(prev.start_time, curr.start_time)
            - i64::from(prev.duration_minutes);
        if gap < i64::from(min_rest) {
            violations.push(Violation::insufficient_rest(
                &curr.id,
                competitor_id,
                &prev.id,
                format!(
                    "{name} has only {gap} min rest before the {} match on day {} (minimum {min_rest} min)",
                    format_clock(curr.start_time),
                    curr.day
                ),
            ));
        }
    }
}
