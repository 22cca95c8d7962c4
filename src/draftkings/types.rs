//! DraftKings player records and export payloads.

use crate::cli::types::PositionSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Most recent games kept per player.
pub const RECENT_GAMES: usize = 5;

/// Accepts a number, a numeric string (`"7,500"`, `"$7500"`), or nothing.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// Ids show up as strings in the JSON exports and as integers in the salary CSV.
fn de_lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// One game in a player's recent history.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecentGame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Opponent, e.g. `"vs LAL"` or `"@ BOS"`.
    #[serde(default)]
    pub opp: String,
    /// DraftKings fantasy points scored.
    #[serde(default, deserialize_with = "de_lenient_f64", serialize_with = "ser_points")]
    pub dk: Option<f64>,
}

fn ser_points<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(value.unwrap_or(0.0))
}

impl RecentGame {
    pub fn new(opp: impl Into<String>, dk: f64) -> Self {
        Self {
            date: None,
            opp: opp.into(),
            dk: Some(dk),
        }
    }

    pub fn points(&self) -> f64 {
        self.dk.unwrap_or(0.0)
    }
}

/// A player record as it arrives from a JSON export, before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default, deserialize_with = "de_lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub salary: Option<f64>,
    #[serde(rename = "avgDK", default, deserialize_with = "de_lenient_f64")]
    pub avg_dk: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "gameInfo", default)]
    pub game_info: Option<String>,
    #[serde(default)]
    pub last5: Option<Vec<RecentGame>>,
}

/// A normalised DraftKings player.
///
/// Missing or invalid numbers become `0`, missing strings become empty, and the
/// position listing is parsed once into a [`PositionSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlayer")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Position listing as supplied, e.g. `"PG/SG"`.
    pub position: String,
    pub team: String,
    pub salary: u32,
    /// Average DraftKings points (the projection).
    #[serde(rename = "avgDK")]
    pub avg_dk: f64,
    /// Secondary value figure, points per $1k of salary.
    pub efficiency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "gameInfo", skip_serializing_if = "Option::is_none")]
    pub game_info: Option<String>,
    pub last5: Vec<RecentGame>,
    #[serde(skip)]
    pub positions: PositionSet,
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        let salary = raw
            .salary
            .filter(|s| *s > 0.0)
            .map(|s| s.round().min(u32::MAX as f64) as u32)
            .unwrap_or(0);
        let non_negative = |v: Option<f64>| v.filter(|x| *x > 0.0).unwrap_or(0.0);

        let mut last5 = raw.last5.unwrap_or_default();
        last5.truncate(RECENT_GAMES);

        let position = raw.position.unwrap_or_default();
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default().trim().to_string(),
            positions: PositionSet::parse(&position),
            position,
            team: raw.team.unwrap_or_default(),
            salary,
            avg_dk: non_negative(raw.avg_dk),
            efficiency: non_negative(raw.efficiency),
            image: raw.image,
            game_info: raw.game_info.filter(|g| !g.trim().is_empty()),
            last5,
        }
    }
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        team: impl Into<String>,
        salary: u32,
        avg_dk: f64,
        efficiency: f64,
    ) -> Self {
        let position = position.into();
        Self {
            id: id.into(),
            name: name.into(),
            positions: PositionSet::parse(&position),
            position,
            team: team.into(),
            salary,
            avg_dk,
            efficiency,
            image: None,
            game_info: None,
            last5: Vec::new(),
        }
    }

    pub fn with_recent(mut self, mut games: Vec<RecentGame>) -> Self {
        games.truncate(RECENT_GAMES);
        self.last5 = games;
        self
    }

    /// Whether the record can enter the candidate pool: named, with a
    /// non-empty position listing and a positive salary and projection.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.positions.is_empty()
            && self.salary > 0
            && self.avg_dk > 0.0
    }

    /// Mean DraftKings points over the recorded recent games.
    pub fn recent_average(&self) -> Option<f64> {
        if self.last5.is_empty() {
            return None;
        }
        let total: f64 = self.last5.iter().map(RecentGame::points).sum();
        Some(total / self.last5.len() as f64)
    }
}

/// A player export: either `{ "count": n, "data": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayersPayload {
    Envelope {
        #[serde(default)]
        count: Option<usize>,
        data: Vec<Player>,
    },
    List(Vec<Player>),
}

impl PlayersPayload {
    pub fn into_players(self) -> Vec<Player> {
        match self {
            PlayersPayload::Envelope { count, data } => {
                if let Some(count) = count {
                    if count != data.len() {
                        tracing::debug!(count, actual = data.len(), "player count mismatch");
                    }
                }
                data
            }
            PlayersPayload::List(data) => data,
        }
    }
}
