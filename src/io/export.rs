//! Schedule CSV export.
//!
//! One header row, then one row per match:
//!
//! ```text
//! MatchID,Day,StartTime,Court,SideA,SideB,Status
//! G-1,1,09:00,Court 1,Aces,Dukes,scheduled
//! ```
//!
//! Court and side ids are resolved to display names. Unknown competitors
//! export as `Unknown`; unknown courts fall back to the raw court id.

use std::io::{self, Write};

use csv::Writer;

use crate::error::{Result, ScheduleError};
use crate::models::clock::format_clock;
use crate::models::{competitor_name, Competitor, Court, Match};

/// Header row of the schedule export.
pub const SCHEDULE_HEADER: [&str; 7] = [
    "MatchID",
    "Day",
    "StartTime",
    "Court",
    "SideA",
    "SideB",
    "Status",
];

const UNKNOWN_COMPETITOR: &str = "Unknown";

/// Writes the schedule as CSV to `writer`.
pub fn export_schedule<W: Write>(
    writer: W,
    matches: &[Match],
    competitors: &[Competitor],
    courts: &[Court],
) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_HEADER)?;

    for m in matches {
        let court = courts
            .iter()
            .find(|c| c.id == m.court_id)
            .map(|c| c.name.as_str())
            .unwrap_or(&m.court_id);
        let side_a = competitor_name(competitors, &m.side_a).unwrap_or(UNKNOWN_COMPETITOR);
        let side_b = competitor_name(competitors, &m.side_b).unwrap_or(UNKNOWN_COMPETITOR);

        let day = m.day.to_string();
        let start = format_clock(m.start_time);

        wtr.write_record([
            m.id.as_str(),
            day.as_str(),
            start.as_str(),
            court,
            side_a,
            side_b,
            m.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the schedule CSV into a string.
pub fn export_schedule_string(
    matches: &[Match],
    competitors: &[Competitor],
    courts: &[Court],
) -> Result<String> {
    let mut buf = Vec::new();
    export_schedule(&mut buf, matches, competitors, courts)?;
    String::from_utf8(buf)
        .map_err(|e| ScheduleError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::parse_clock;
    use crate::models::{MatchStatus, TimeSlot};

    fn fixture() -> (Vec<Match>, Vec<Competitor>, Vec<Court>) {
        let courts = Court::numbered(2);
        let s0 = TimeSlot::new("day1-slot0", 1, parse_clock("09:00").unwrap(), 45);
        let s1 = TimeSlot::new("day2-slot1", 2, parse_clock("10:30").unwrap(), 45);
        let matches = vec![
            Match::new("G1", "A", "B", &courts[0], &s0, 45),
            Match::new("G2", "B", "Z", &courts[1], &s1, 45).with_status(MatchStatus::InProgress),
        ];
        let roster = vec![Competitor::new("A", "Aces"), Competitor::new("B", "Bears")];
        (matches, roster, courts)
    }

    #[test]
    fn test_export_rows() {
        let (matches, roster, courts) = fixture();
        let csv = export_schedule_string(&matches, &roster, &courts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "MatchID,Day,StartTime,Court,SideA,SideB,Status");
        assert_eq!(lines[1], "G1,1,09:00,Court 1,Aces,Bears,scheduled");
        assert_eq!(lines[2], "G2,2,10:30,Court 2,Bears,Unknown,in-progress");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_quotes_names_with_commas() {
        let (matches, _, courts) = fixture();
        let roster = vec![
            Competitor::new("A", "Aces, Jr."),
            Competitor::new("B", "Bears"),
        ];
        let csv = export_schedule_string(&matches[..1], &roster, &courts).unwrap();
        assert!(csv.contains("\"Aces, Jr.\""));
    }

    #[test]
    fn test_export_unknown_court_uses_id() {
        let (matches, roster, _) = fixture();
        let csv = export_schedule_string(&matches[..1], &roster, &[]).unwrap();
        assert!(csv.contains(",court-1,"));
    }

    #[test]
    fn test_export_empty_schedule_has_header() {
        let csv = export_schedule_string(&[], &[], &[]).unwrap();
        assert_eq!(csv, "MatchID,Day,StartTime,Court,SideA,SideB,Status\n");
    }
}
