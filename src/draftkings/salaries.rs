//! DraftKings salary CSV ingestion.
//!
//! The salary export DraftKings offers per contest has one row per player:
//!
//! ```text
//! Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
//! PG,Trae Young (1234),Trae Young,1234,PG/G/UTIL,9200,ATL@BOS 11/14/2025 07:30PM ET,ATL,48.1
//! ```
//!
//! The export carries no value figure, so efficiency is derived as points per
//! $1k of salary.

use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::{draftkings::types::Player, Result};

#[derive(Debug, Deserialize)]
struct SalaryRow {
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "Salary", deserialize_with = "csv::invalid_option", default)]
    salary: Option<f64>,
    #[serde(rename = "TeamAbbrev", default)]
    team: String,
    #[serde(
        rename = "AvgPointsPerGame",
        deserialize_with = "csv::invalid_option",
        default
    )]
    avg_points: Option<f64>,
    #[serde(rename = "Game Info", alias = "GameInfo", default)]
    game_info: Option<String>,
}

/// Points per $1k of salary; zero when there is no salary to divide by.
pub fn points_per_thousand(avg_points: f64, salary: u32) -> f64 {
    if salary == 0 {
        return 0.0;
    }
    avg_points / (salary as f64 / 1000.0)
}

impl From<SalaryRow> for Player {
    fn from(row: SalaryRow) -> Self {
        let salary = row
            .salary
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(|s| s.round() as u32)
            .unwrap_or(0);
        let avg_dk = row
            .avg_points
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(0.0);

        let mut player = Player::new(
            row.id.trim(),
            row.name.trim(),
            row.position.trim(),
            row.team.trim(),
            salary,
            avg_dk,
            points_per_thousand(avg_dk, salary),
        );
        player.game_info = row.game_info.filter(|g| !g.trim().is_empty());
        player
    }
}

/// Parse salary rows from any reader. Blank lines are skipped.
pub fn read_salaries<R: Read>(reader: R) -> Result<Vec<Player>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut players = Vec::new();
    for row in rdr.deserialize::<SalaryRow>() {
        players.push(Player::from(row?));
    }

    tracing::debug!(rows = players.len(), "parsed salary CSV");
    Ok(players)
}

/// Parse a DraftKings salary CSV file.
pub fn load_salaries_csv(path: &Path) -> Result<Vec<Player>> {
    let file = std::fs::File::open(path)?;
    read_salaries(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Position;

    const SAMPLE: &str = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
PG,Trae Young (1001),Trae Young,1001,PG/G/UTIL,9200,ATL@BOS 11/14/2025 07:30PM ET,ATL,48.1
C,Jalen Duren (1002),Jalen Duren,1002,C/UTIL,6000,DET@MIL 11/14/2025 08:00PM ET,DET,30
SF,Deep Bench (1003),Deep Bench,1003,SF/F/UTIL,3000,DET@MIL 11/14/2025 08:00PM ET,DET,
";

    #[test]
    fn test_read_salaries_maps_columns() {
        let players = read_salaries(SAMPLE.as_bytes()).unwrap();
        assert_eq!(players.len(), 3);

        let trae = &players[0];
        assert_eq!(trae.id, "1001");
        assert_eq!(trae.name, "Trae Young");
        assert_eq!(trae.team, "ATL");
        assert_eq!(trae.salary, 9200);
        assert_eq!(trae.avg_dk, 48.1);
        assert!(trae.positions.contains(Position::PG));
        assert_eq!(
            trae.game_info.as_deref(),
            Some("ATL@BOS 11/14/2025 07:30PM ET")
        );
    }

    #[test]
    fn test_efficiency_is_points_per_thousand() {
        let players = read_salaries(SAMPLE.as_bytes()).unwrap();
        let duren = &players[1];
        assert!((duren.efficiency - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_average_yields_invalid_player() {
        let players = read_salaries(SAMPLE.as_bytes()).unwrap();
        let bench = &players[2];
        assert_eq!(bench.avg_dk, 0.0);
        assert_eq!(bench.efficiency, 0.0);
        assert!(!bench.is_valid());
    }

    #[test]
    fn test_points_per_thousand_zero_salary() {
        assert_eq!(points_per_thousand(30.0, 0), 0.0);
        assert_eq!(points_per_thousand(30.0, 6000), 5.0);
    }

    #[test]
    fn test_load_salaries_csv_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DKSalaries.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let players = load_salaries_csv(&path).unwrap();
        assert_eq!(players.len(), 3);
    }

    #[test]
    fn test_load_salaries_csv_missing_file() {
        let result = load_salaries_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(crate::LineupError::Io(_))));
    }
}
