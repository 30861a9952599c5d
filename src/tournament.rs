//! Tournament state.
//!
//! [`Tournament`] is the caller-owned orchestrator around the generator
//! and validator: it holds the roster, the grid built from
//! [`TournamentSettings`], the current matches and the violations derived
//! from them. Every change to the match set re-runs validation, so
//! `violations` always describes `matches`.
//!
//! All mutation goes through `&mut self`, so one generation or validation
//! pass is in flight at a time.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use log::info;

use crate::config::{ScheduleConfig, TournamentSettings};
use crate::error::{Result, ScheduleError};
use crate::io::{export_schedule, import_roster_into};
use crate::models::{Competitor, Court, Match, TimeSlot, Violation};
use crate::scheduler::{IdGenerator, RandomIds, ScheduleGenerator};
use crate::validation::validate;

/// A tournament being planned.
#[derive(Debug)]
pub struct Tournament {
    settings: TournamentSettings,
    competitors: Vec<Competitor>,
    courts: Vec<Court>,
    time_slots: Vec<TimeSlot>,
    matches: Vec<Match>,
    violations: Vec<Violation>,
    ids: Box<dyn IdGenerator>,
    roster_ids: Box<dyn IdGenerator>,
}

impl Tournament {
    /// Creates an empty tournament; the grid is built from `settings`.
    pub fn new(settings: TournamentSettings) -> Self {
        Self::with_id_generator(settings, RandomIds::new())
    }

    /// Creates an empty tournament drawing match ids from `ids`.
    ///
    /// Roster rows imported without an id get random ids from a separate
    /// source; see [`with_roster_id_generator`](Self::with_roster_id_generator).
    pub fn with_id_generator(
        settings: TournamentSettings,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        let courts = settings.build_courts();
        let time_slots = settings.build_time_slots();
        Self {
            settings,
            competitors: Vec::new(),
            courts,
            time_slots,
            matches: Vec::new(),
            violations: Vec::new(),
            ids: Box::new(ids),
            roster_ids: Box::new(RandomIds::new()),
        }
    }

    /// Sets the id source for imported competitors that have no id.
    pub fn with_roster_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.roster_ids = Box::new(ids);
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &TournamentSettings {
        &self.settings
    }

    /// Generator/validator configuration derived from the settings.
    pub fn schedule_config(&self) -> ScheduleConfig {
        self.settings.schedule_config()
    }

    /// Roster, in entry order.
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Courts.
    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    /// Time slots, ordered by `(day, start_time)`.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Current matches.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Violations of the current matches.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any `Error`-severity violation exists.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(Violation::is_error)
    }

    /// Violations reported against a given match.
    pub fn violations_for_match(&self, match_id: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.match_id == match_id)
            .collect()
    }

    /// Replaces the settings and rebuilds the court/slot grid.
    ///
    /// Existing matches are kept and re-validated against the new rules;
    /// placements that no longer exist show up in
    /// [`validate_input`](crate::validation::validate_input).
    pub fn update_settings(&mut self, settings: TournamentSettings) {
        self.courts = settings.build_courts();
        self.time_slots = settings.build_time_slots();
        self.settings = settings;
        self.check_conflicts();
    }

    /// Appends a competitor to the roster.
    ///
    /// # Errors
    /// [`ScheduleError::DuplicateCompetitor`] if the id is already taken.
    pub fn add_competitor(&mut self, competitor: Competitor) -> Result<()> {
        if self.competitors.iter().any(|c| c.id == competitor.id) {
            return Err(ScheduleError::DuplicateCompetitor(competitor.id));
        }
        self.competitors.push(competitor);
        Ok(())
    }

    /// Removes a competitor and every match it plays in.
    ///
    /// Returns `false` if no such competitor exists.
    pub fn remove_competitor(&mut self, competitor_id: &str) -> bool {
        let before = self.competitors.len();
        self.competitors.retain(|c| c.id != competitor_id);
        if self.competitors.len() == before {
            return false;
        }

        self.matches.retain(|m| !m.involves(competitor_id));
        self.check_conflicts();
        true
    }

    /// Empties the roster and the schedule.
    pub fn clear_competitors(&mut self) {
        self.competitors.clear();
        self.clear_schedule();
    }

    /// Appends competitors parsed from a roster CSV; returns how many.
    ///
    /// Rows reusing an id already in the roster are skipped.
    pub fn import_roster_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let imported = import_roster_into(reader, self.roster_ids.as_mut(), &self.competitors)?;
        let count = imported.len();
        self.competitors.extend(imported);
        Ok(count)
    }

    /// Replaces the schedule with a freshly generated one and validates it.
    ///
    /// # Errors
    /// [`ScheduleError::InsufficientRoster`] with fewer than 2 competitors;
    /// the current schedule is left untouched.
    pub fn auto_schedule(&mut self) -> Result<&[Match]> {
        let config = self.schedule_config();
        let mut generator = ScheduleGenerator::with_id_generator(self.ids.as_mut());
        let matches = generator.generate(
            &self.competitors,
            &self.courts,
            &self.time_slots,
            &config,
        )?;

        info!(
            "Auto-scheduled {} matches for {} competitors",
            matches.len(),
            self.competitors.len()
        );
        self.matches = matches;
        self.check_conflicts();
        Ok(&self.matches)
    }

    /// Adds a manually placed match.
    pub fn add_match(&mut self, game: Match) {
        self.matches.push(game);
        self.check_conflicts();
    }

    /// Removes a match; returns it if it existed.
    pub fn remove_match(&mut self, match_id: &str) -> Option<Match> {
        let idx = self.matches.iter().position(|m| m.id == match_id)?;
        let removed = self.matches.remove(idx);
        self.check_conflicts();
        Some(removed)
    }

    /// Moves a match to another court and time slot.
    ///
    /// The move is never refused because of conflicts; the resulting
    /// violations are available from [`violations`](Self::violations).
    ///
    /// # Errors
    /// `UnknownMatch`, `UnknownCourt` or `UnknownTimeSlot` if an id does
    /// not resolve.
    pub fn move_match(
        &mut self,
        match_id: &str,
        court_id: &str,
        time_slot_id: &str,
    ) -> Result<()> {
        let court = self
            .courts
            .iter()
            .find(|c| c.id == court_id)
            .ok_or_else(|| ScheduleError::UnknownCourt(court_id.to_string()))?;
        let slot = self
            .time_slots
            .iter()
            .find(|s| s.id == time_slot_id)
            .ok_or_else(|| ScheduleError::UnknownTimeSlot(time_slot_id.to_string()))?;
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| ScheduleError::UnknownMatch(match_id.to_string()))?;

        game.reassign(court, slot);
        info!("Moved match {match_id} to {court_id} / {time_slot_id}");
        self.check_conflicts();
        Ok(())
    }

    /// Re-derives violations from the current matches.
    pub fn check_conflicts(&mut self) -> &[Violation] {
        self.violations = validate(&self.matches, &self.competitors, &self.schedule_config());
        &self.violations
    }

    /// Drops all matches and violations.
    pub fn clear_schedule(&mut self) {
        self.matches.clear();
        self.violations.clear();
    }

    /// Writes the schedule CSV.
    pub fn export_schedule_csv<W: Write>(&self, writer: W) -> Result<()> {
        export_schedule(writer, &self.matches, &self.competitors, &self.courts)
    }

    /// Distinct age groups in the roster, sorted.
    pub fn age_groups(&self) -> Vec<String> {
        distinct(self.competitors.iter().filter_map(|c| c.age_group.as_deref()))
    }

    /// Distinct cities in the roster, sorted.
    pub fn cities(&self) -> Vec<String> {
        distinct(self.competitors.iter().filter_map(|c| c.city.as_deref()))
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(TournamentSettings::default())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
