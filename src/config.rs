//! Configuration.
//!
//! Two layers:
//! - [`ScheduleConfig`]: the fully populated input of the generator and
//!   validator. Every field is required; nothing is defaulted here.
//! - [`TournamentSettings`]: the caller-facing tournament setup (name,
//!   dates, grid shape). It carries defaults, loads from JSON, and projects
//!   a `ScheduleConfig` plus the court/slot grid.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{clock, Court, TimeSlot};

/// Input parameters for generation and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Target number of matches per competitor (≥ 1). Clamped to `n - 1`.
    pub matches_per_competitor: usize,
    /// Match length in minutes (> 0).
    pub match_duration: u32,
    /// Minimum rest between a competitor's same-day matches, in minutes.
    pub min_rest_between_games: u32,
    /// Whether the rest check runs at all.
    pub avoid_back_to_back: bool,
}

impl ScheduleConfig {
    /// Creates a configuration.
    pub fn new(
        matches_per_competitor: usize,
        match_duration: u32,
        min_rest_between_games: u32,
        avoid_back_to_back: bool,
    ) -> Self {
        Self {
            matches_per_competitor,
            match_duration,
            min_rest_between_games,
            avoid_back_to_back,
        }
    }

    /// Checks field ranges.
    pub fn validate(&self) -> Result<()> {
        if self.matches_per_competitor == 0 {
            return Err(ScheduleError::InvalidConfig(
                "matches_per_competitor must be at least 1".into(),
            ));
        }
        if self.match_duration == 0 {
            return Err(ScheduleError::InvalidConfig(
                "match_duration must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Tournament setup as entered by the organizer.
///
/// Missing JSON fields take the [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    /// Tournament title.
    pub name: String,
    /// First day of play.
    pub start_date: NaiveDate,
    /// Number of days.
    pub days: u32,
    /// Target matches per team.
    pub games_per_team: usize,
    /// Match length in minutes.
    pub game_duration: u32,
    /// Minimum rest between a team's matches, in minutes.
    pub rest_period: u32,
    /// Whether to flag insufficient rest.
    pub avoid_back_to_back: bool,
    /// Number of courts.
    pub courts: usize,
    /// Daily slot start times (`HH:MM`).
    #[serde(with = "clock::hhmm_list")]
    pub time_slots: Vec<NaiveTime>,
    /// Group the roster by age bracket when displaying.
    pub group_by_age: bool,
    /// Group the roster by city when displaying.
    pub group_by_city: bool,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        let time_slots = (9..=16)
            .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
            .collect();
        Self {
            name: "Basketball Tournament".to_string(),
            start_date: Local::now().date_naive(),
            days: 2,
            games_per_team: 3,
            game_duration: 45,
            rest_period: 15,
            avoid_back_to_back: true,
            courts: 3,
            time_slots,
            group_by_age: false,
            group_by_city: false,
        }
    }
}

impl TournamentSettings {
    /// Parses settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The generator/validator configuration implied by these settings.
    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::new(
            self.games_per_team,
            self.game_duration,
            self.rest_period,
            self.avoid_back_to_back,
        )
    }

    /// `Court 1` .. `Court N`.
    pub fn build_courts(&self) -> Vec<Court> {
        Court::numbered(self.courts)
    }

    /// One slot per start time per day, each `game_duration` long.
    pub fn build_time_slots(&self) -> Vec<TimeSlot> {
        TimeSlot::grid(&self.time_slots, self.days, self.game_duration)
    }
}
