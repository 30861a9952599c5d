//! Round-robin schedule generator.
//!
//! # Algorithm
//!
//! 1. Clamp the target matches per competitor to `n - 1`; that many
//!    circle-method rounds are paired (see [`super::round_robin`]).
//! 2. Place the k-th produced match on court `k mod C` in time slot
//!    `(k div C) mod S`: courts are filled round-robin within a slot before
//!    moving to the next slot.
//!
//! No conflict avoidance happens here. Placement wraps when the grid is
//! exhausted, and the validator reports whatever collisions result.
//!
//! # Complexity
//! O(rounds · n).

use std::collections::HashSet;

use log::{debug, warn};

use super::ids::{IdGenerator, RandomIds};
use super::round_robin;
use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Competitor, Court, Match, TimeSlot};

/// Produces matches from a roster and a court/time-slot grid.
///
/// # Example
///
/// ```
/// use u_tournament::config::ScheduleConfig;
/// use u_tournament::models::{clock, Competitor, Court, TimeSlot};
/// use u_tournament::scheduler::{ScheduleGenerator, SequentialIds};
///
/// let roster = vec![
///     Competitor::new("A", "Aces"),
///     Competitor::new("B", "Bears"),
///     Competitor::new("C", "Comets"),
///     Competitor::new("D", "Dukes"),
/// ];
/// let courts = Court::numbered(2);
/// let starts: Vec<_> = ["09:00", "10:00", "11:00"]
///     .iter()
///     .map(|t| clock::parse_clock(t).unwrap())
///     .collect();
/// let slots = TimeSlot::grid(&starts, 1, 45);
///
/// let mut generator = ScheduleGenerator::with_id_generator(SequentialIds::new("G"));
/// let matches = generator
///     .generate(&roster, &courts, &slots, &ScheduleConfig::new(3, 45, 15, true))
///     .unwrap();
/// assert_eq!(matches.len(), 6);
/// assert_eq!(matches[0].id, "G-1");
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator<G: IdGenerator = RandomIds> {
    ids: G,
}

impl ScheduleGenerator<RandomIds> {
    /// Creates a generator that assigns random ids.
    pub fn new() -> Self {
        Self {
            ids: RandomIds::new(),
        }
    }
}

impl Default for ScheduleGenerator<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ScheduleGenerator<G> {
    /// Creates a generator with a custom id strategy.
    pub fn with_id_generator(ids: G) -> Self {
        Self { ids }
    }

    /// Consumes the generator, returning its id source.
    pub fn into_id_generator(self) -> G {
        self.ids
    }

    /// Generates matches.
    ///
    /// # Errors
    /// - [`ScheduleError::InsufficientRoster`] for fewer than 2 competitors
    ///   (no matches are produced).
    /// - [`ScheduleError::DuplicateCompetitor`] when two competitors share
    ///   an id.
    /// - [`ScheduleError::InvalidConfig`] for out-of-range config fields.
    /// - [`ScheduleError::EmptyGrid`] when there are no courts or no slots.
    pub fn generate(
        &mut self,
        competitors: &[Competitor],
        courts: &[Court],
        time_slots: &[TimeSlot],
        config: &ScheduleConfig,
    ) -> Result<Vec<Match>> {
        let n = competitors.len();
        if n < 2 {
            return Err(ScheduleError::InsufficientRoster { found: n });
        }
        let mut seen = HashSet::with_capacity(n);
        if let Some(dup) = competitors.iter().find(|c| !seen.insert(c.id.as_str())) {
            return Err(ScheduleError::DuplicateCompetitor(dup.id.clone()));
        }
        config.validate()?;
        if courts.is_empty() || time_slots.is_empty() {
            return Err(ScheduleError::EmptyGrid);
        }

        let rounds = config.matches_per_competitor.min(n - 1);
        let pairings = round_robin::pairings(n, rounds);

        let capacity = courts.len() * time_slots.len();
        if pairings.len() > capacity {
            warn!(
                "{} matches exceed grid capacity of {} ({} courts x {} slots); placements will repeat",
                pairings.len(),
                capacity,
                courts.len(),
                time_slots.len()
            );
        }

        let matches: Vec<Match> = pairings
            .iter()
            .enumerate()
            .map(|(k, p)| {
                let court = &courts[k % courts.len()];
                let slot = &time_slots[(k / courts.len()) % time_slots.len()];
                Match::new(
                    self.ids.next_id(),
                    competitors[p.side_a].id.clone(),
                    competitors[p.side_b].id.clone(),
                    court,
                    slot,
                    config.match_duration,
                )
            })
            .collect();

        debug!(
            "Generated {} matches for {} competitors over {} rounds",
            matches.len(),
            n,
            rounds
        );

        Ok(matches)
    }
}

/// Generates matches with random ids.
///
/// Shorthand for `ScheduleGenerator::new().generate(..)`.
pub fn generate(
    competitors: &[Competitor],
    courts: &[Court],
    time_slots: &[TimeSlot],
    config: &ScheduleConfig,
) -> Result<Vec<Match>> {
    ScheduleGenerator::new().generate(competitors, courts, time_slots, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::parse_clock;
    use crate::models::MatchStatus;
    use crate::scheduler::SequentialIds;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Competitor> {
        (0..n)
            .map(|i| Competitor::new(format!("T{i}"), format!("Team {i}")))
            .collect()
    }

    fn slots(count: usize, days: u32) -> Vec<TimeSlot> {
        let starts: Vec<_> = (0..count)
            .map(|i| parse_clock(&format!("{:02}:00", 8 + i)).unwrap())
            .collect();
        TimeSlot::grid(&starts, days, 45)
    }

    fn generator() -> ScheduleGenerator<SequentialIds> {
        ScheduleGenerator::with_id_generator(SequentialIds::new("G"))
    }

    #[test]
    fn test_four_competitors_play_everyone_once() {
        let config = ScheduleConfig::new(3, 45, 15, false);
        let matches = generator()
            .generate(&roster(4), &Court::numbered(2), &slots(4, 1), &config)
            .unwrap();

        assert_eq!(matches.len(), 6);
        let pairs: HashSet<(String, String)> = matches
            .iter()
            .map(|m| {
                let mut p = [m.side_a.clone(), m.side_b.clone()];
                p.sort();
                (p[0].clone(), p[1].clone())
            })
            .collect();
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn test_matches_per_competitor_clamped() {
        let config = ScheduleConfig::new(10, 45, 15, false);
        let matches = generator()
            .generate(&roster(3), &Court::numbered(1), &slots(8, 1), &config)
            .unwrap();
        // k = min(10, 2) = 2 rounds of one match each.
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_placement_walks_courts_then_slots() {
        let config = ScheduleConfig::new(3, 45, 15, false);
        let courts = Court::numbered(2);
        let grid = slots(4, 1);
        let matches = generator()
            .generate(&roster(4), &courts, &grid, &config)
            .unwrap();

        let placements: Vec<(&str, &str)> = matches
            .iter()
            .map(|m| (m.time_slot_id.as_str(), m.court_id.as_str()))
            .collect();
        assert_eq!(
            placements,
            vec![
                ("day1-slot0", "court-1"),
                ("day1-slot0", "court-2"),
                ("day1-slot1", "court-1"),
                ("day1-slot1", "court-2"),
                ("day1-slot2", "court-1"),
                ("day1-slot2", "court-2"),
            ]
        );
        assert_eq!(matches[2].start_time, grid[1].start_time);
    }

    #[test]
    fn test_placement_wraps_when_grid_exhausted() {
        let config = ScheduleConfig::new(3, 45, 15, false);
        let matches = generator()
            .generate(&roster(4), &Court::numbered(1), &slots(2, 1), &config)
            .unwrap();

        assert_eq!(matches.len(), 6);
        assert_eq!(matches[0].time_slot_id, "day1-slot0");
        assert_eq!(matches[1].time_slot_id, "day1-slot1");
        assert_eq!(matches[2].time_slot_id, "day1-slot0");
    }

    #[test]
    fn test_output_guarantees() {
        let config = ScheduleConfig::new(4, 30, 15, true);
        let team_ids: HashSet<String> = roster(7).into_iter().map(|c| c.id).collect();
        let matches = generator()
            .generate(&roster(7), &Court::numbered(3), &slots(6, 2), &config)
            .unwrap();

        let ids: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), matches.len());
        for m in &matches {
            assert_ne!(m.side_a, m.side_b);
            assert!(team_ids.contains(&m.side_a));
            assert!(team_ids.contains(&m.side_b));
            assert_eq!(m.status, MatchStatus::Scheduled);
            assert_eq!(m.duration_minutes, 30);
        }
    }

    #[test]
    fn test_insufficient_roster() {
        let config = ScheduleConfig::new(3, 45, 15, true);
        let err = generator()
            .generate(&roster(1), &Court::numbered(2), &slots(4, 1), &config)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InsufficientRoster { found: 1 }));

        let err = generator()
            .generate(&[], &Court::numbered(2), &slots(4, 1), &config)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InsufficientRoster { found: 0 }));
    }

    #[test]
    fn test_duplicate_competitor_ids_rejected() {
        let config = ScheduleConfig::new(3, 45, 15, true);
        let mut teams = roster(3);
        teams.push(Competitor::new("T1", "Team 1 again"));

        let err = generator()
            .generate(&teams, &Court::numbered(2), &slots(4, 1), &config)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCompetitor(ref id) if id == "T1"));

        // Two entries, one id: would otherwise pair "T0" with itself.
        let twins = vec![Competitor::new("T0", "Team 0"), Competitor::new("T0", "Team 0")];
        let err = generator()
            .generate(&twins, &Court::numbered(1), &slots(1, 1), &config)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCompetitor(_)));
    }

    #[test]
    fn test_invalid_config_and_empty_grid() {
        let bad = ScheduleConfig::new(3, 0, 15, true);
        let err = generator()
            .generate(&roster(4), &Court::numbered(2), &slots(4, 1), &bad)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));

        let ok = ScheduleConfig::new(3, 45, 15, true);
        let err = generator()
            .generate(&roster(4), &[], &slots(4, 1), &ok)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyGrid));

        let err = generator()
            .generate(&roster(4), &Court::numbered(2), &[], &ok)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyGrid));
    }

    #[test]
    fn test_deterministic_with_sequential_ids() {
        let config = ScheduleConfig::new(3, 45, 15, true);
        let a = generator()
            .generate(&roster(6), &Court::numbered(2), &slots(8, 1), &config)
            .unwrap();
        let b = generator()
            .generate(&roster(6), &Court::numbered(2), &slots(8, 1), &config)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_continue_across_calls() {
        let config = ScheduleConfig::new(1, 45, 15, true);
        let mut g = generator();
        let first = g
            .generate(&roster(2), &Court::numbered(1), &slots(1, 1), &config)
            .unwrap();
        let second = g
            .generate(&roster(2), &Court::numbered(1), &slots(1, 1), &config)
            .unwrap();
        assert_eq!(first[0].id, "G-1");
        assert_eq!(second[0].id, "G-2");
    }

    #[test]
    fn test_id_source_handed_back() {
        let config = ScheduleConfig::new(1, 45, 15, true);
        let mut g = generator();
        g.generate(&roster(2), &Court::numbered(1), &slots(1, 1), &config)
            .unwrap();

        let mut ids = g.into_id_generator();
        assert_eq!(ids.next_id(), "G-2");

        let matches = ScheduleGenerator::with_id_generator(ids)
            .generate(&roster(2), &Court::numbered(1), &slots(1, 1), &config)
            .unwrap();
        assert_eq!(matches[0].id, "G-3");
    }

    #[test]
    fn test_default_generator_random_ids() {
        let config = ScheduleConfig::new(3, 45, 15, true);
        let matches = generate(&roster(4), &Court::numbered(2), &slots(4, 1), &config).unwrap();
        let ids: HashSet<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    mod proptests {
        use super::*;
        use crate::validation::validate;
        use proptest::prelude::*;

        proptest! {
            /// Match count is k · ⌊n/2⌋ with k clamped to n - 1.
            #[test]
            fn prop_match_count(n in 2usize..16, k in 1usize..20, courts in 1usize..5) {
                let config = ScheduleConfig::new(k, 45, 15, true);
                let matches = generator()
                    .generate(&roster(n), &Court::numbered(courts), &slots(8, 2), &config)
                    .unwrap();
                prop_assert_eq!(matches.len(), k.min(n - 1) * (n / 2));
            }

            /// No pairing is ever produced twice.
            #[test]
            fn prop_distinct_pairings(n in 2usize..16, k in 1usize..20) {
                let config = ScheduleConfig::new(k, 45, 15, true);
                let matches = generator()
                    .generate(&roster(n), &Court::numbered(2), &slots(8, 1), &config)
                    .unwrap();
                let mut seen = HashSet::new();
                for m in &matches {
                    prop_assert_ne!(&m.side_a, &m.side_b);
                    let key = if m.side_a < m.side_b {
                        (m.side_a.clone(), m.side_b.clone())
                    } else {
                        (m.side_b.clone(), m.side_a.clone())
                    };
                    prop_assert!(seen.insert(key));
                }
            }

            /// Both sides of every match come from the roster.
            #[test]
            fn prop_sides_in_roster(n in 2usize..16, k in 1usize..20, courts in 1usize..5) {
                let teams = roster(n);
                let ids: HashSet<&str> = teams.iter().map(|c| c.id.as_str()).collect();
                let config = ScheduleConfig::new(k, 45, 15, true);
                let matches = generator()
                    .generate(&teams, &Court::numbered(courts), &slots(6, 2), &config)
                    .unwrap();
                for m in &matches {
                    prop_assert!(ids.contains(m.side_a.as_str()));
                    prop_assert!(ids.contains(m.side_b.as_str()));
                }
            }

            /// Validating the same output twice reports the same violations.
            #[test]
            fn prop_validate_idempotent(
                n in 2usize..16,
                k in 1usize..20,
                courts in 1usize..5,
                slot_count in 1usize..6,
                rest_check in any::<bool>(),
            ) {
                let teams = roster(n);
                let config = ScheduleConfig::new(k, 45, 30, rest_check);
                let matches = generator()
                    .generate(&teams, &Court::numbered(courts), &slots(slot_count, 1), &config)
                    .unwrap();

                let first: HashSet<_> = validate(&matches, &teams, &config).into_iter().collect();
                let second: HashSet<_> = validate(&matches, &teams, &config).into_iter().collect();
                prop_assert_eq!(first, second);
            }

            /// One round per slot on ⌊n/2⌋ courts never double-books anyone.
            #[test]
            fn prop_round_per_slot_is_conflict_free(n in 2usize..16, k in 1usize..20) {
                let teams = roster(n);
                let rounds = k.min(n - 1);
                let config = ScheduleConfig::new(k, 45, 15, false);
                let matches = generator()
                    .generate(&teams, &Court::numbered(n / 2), &slots(rounds, 1), &config)
                    .unwrap();

                prop_assert!(validate(&matches, &teams, &config).is_empty());
            }
        }
    }
}
