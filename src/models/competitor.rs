//! Competitor (team) model.
//!
//! A competitor is an entrant that can be paired into matches. Only `id`
//! and `name` matter to generation and validation; the classification
//! attributes exist for grouping and display by the caller.

use serde::{Deserialize, Serialize};

/// An entrant eligible to be paired into matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Unique identifier, stable across regeneration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age bracket (e.g., "2nd-4th Grade").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    /// Grade level (e.g., "3rd").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    /// Home city, used for grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Recorded wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    /// Recorded losses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
}

impl Competitor {
    /// Creates a competitor with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age_group: None,
            grade_level: None,
            city: None,
            wins: None,
            losses: None,
        }
    }

    /// Sets the age group.
    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = Some(age_group.into());
        self
    }

    /// Sets the grade level.
    pub fn with_grade_level(mut self, grade_level: impl Into<String>) -> Self {
        self.grade_level = Some(grade_level.into());
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the win/loss record.
    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = Some(wins);
        self.losses = Some(losses);
        self
    }
}

/// Looks up a competitor's display name, falling back to `None` when the
/// id is not in the roster.
pub fn competitor_name<'a>(competitors: &'a [Competitor], id: &str) -> Option<&'a str> {
    competitors
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
}
