//! Roster CSV import.
//!
//! # Format
//!
//! The first row is a header. Column 0 is the competitor id and column 1
//! the name; remaining columns are matched by (case-insensitive) header
//! substring:
//!
//! | Header contains | Field |
//! |-----------------|-------|
//! | `age` or `group` | `age_group` |
//! | `grade` | `grade_level` |
//! | `city` | `city` |
//! | `win` | `wins` |
//! | `loss` | `losses` |
//!
//! Rows with fewer than two fields, an empty name or an id already in use
//! are skipped. An empty id is replaced with a generated one that collides
//! with no other id. Unparseable win/loss counts read as 0.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use crate::error::Result;
use crate::models::Competitor;
use crate::scheduler::IdGenerator;

/// Column positions of the optional fields.
#[derive(Debug, Default)]
struct Columns {
    age_group: Option<usize>,
    grade_level: Option<usize>,
    city: Option<usize>,
    wins: Option<usize>,
    losses: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        Self {
            age_group: position_of(&lowered, &["age", "group"]),
            grade_level: position_of(&lowered, &["grade"]),
            city: position_of(&lowered, &["city"]),
            wins: position_of(&lowered, &["win"]),
            losses: position_of(&lowered, &["loss"]),
        }
    }
}

/// First header after id and name containing any of `needles`.
fn position_of(headers: &[String], needles: &[&str]) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .skip(2)
        .find(|(_, h)| needles.iter().any(|n| h.contains(*n)))
        .map(|(i, _)| i)
}

/// Parses a roster CSV, drawing ids for rows without one from `ids`.
pub fn import_roster<R: Read>(reader: R, ids: &mut dyn IdGenerator) -> Result<Vec<Competitor>> {
    import_roster_into(reader, ids, &[])
}

/// Parses a roster CSV that will be appended to `existing`.
///
/// Rows whose id is already taken (by `existing` or an earlier row) are
/// skipped. Generated ids skip every id in use, including ids given
/// explicitly further down the file.
pub fn import_roster_into<R: Read>(
    reader: R,
    ids: &mut dyn IdGenerator,
    existing: &[Competitor],
) -> Result<Vec<Competitor>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    let mut rows = Vec::new();

    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let line = line + 2;
        if record.len() < 2 {
            warn!("Skipping roster row {line}: expected at least 2 fields");
            continue;
        }

        let name = record.get(1).unwrap_or_default();
        if name.is_empty() {
            warn!("Skipping roster row {line}: empty name");
            continue;
        }

        let mut competitor = Competitor::new(record.get(0).unwrap_or_default(), name);
        competitor.age_group = text_field(&record, columns.age_group);
        competitor.grade_level = text_field(&record, columns.grade_level);
        competitor.city = text_field(&record, columns.city);
        competitor.wins = count_field(&record, columns.wins);
        competitor.losses = count_field(&record, columns.losses);
        rows.push((line, competitor));
    }

    let given: HashSet<String> = rows
        .iter()
        .map(|(_, c)| c.id.clone())
        .filter(|id| !id.is_empty())
        .collect();
    let mut taken: HashSet<String> = existing.iter().map(|c| c.id.clone()).collect();
    let mut competitors = Vec::with_capacity(rows.len());

    for (line, mut competitor) in rows {
        if competitor.id.is_empty() {
            competitor.id = loop {
                let id = ids.next_id();
                if !taken.contains(&id) && !given.contains(&id) {
                    break id;
                }
            };
        } else if taken.contains(&competitor.id) {
            warn!(
                "Skipping roster row {line}: id '{}' is already in use",
                competitor.id
            );
            continue;
        }
        taken.insert(competitor.id.clone());
        competitors.push(competitor);
    }

    info!("Imported {} competitors from roster CSV", competitors.len());
    Ok(competitors)
}

fn text_field(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn count_field(record: &StringRecord, idx: Option<usize>) -> Option<u32> {
    idx.map(|i| record.get(i).and_then(|v| v.parse().ok()).unwrap_or(0))
}
