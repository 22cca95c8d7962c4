//! Basketball position types and position-string parsing.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five base NBA positions a DraftKings player can be listed at.
///
/// # Examples
///
/// ```rust
/// use dk_lineup::Position;
///
/// let pg: Position = "pg".parse().unwrap();
/// assert_eq!(pg, Position::PG);
/// assert_eq!(pg.to_string(), "PG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn is_guard(self) -> bool {
        matches!(self, Position::PG | Position::SG)
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Position::SF | Position::PF)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(LineupError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// The tokens parsed out of a listing like `"PG/SG"`.
///
/// Base positions are tracked individually. Any other non-empty token
/// (`"G"`, `"UTIL"`, `"HC"`) only marks the listing as non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    const OTHER: u8 = 1 << 7;

    /// Parse a slash- or comma-delimited position string.
    ///
    /// Tokens are trimmed and empty tokens dropped.
    pub fn parse(raw: &str) -> Self {
        let mut set = PositionSet::default();
        for token in raw.split(['/', ',']).map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<Position>() {
                Ok(position) => set.insert(position),
                Err(_) => {
                    tracing::debug!(token, listing = raw, "non-base position code");
                    set.0 |= Self::OTHER;
                }
            }
        }
        set
    }

    pub fn insert(&mut self, position: Position) {
        self.0 |= position.bit();
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0 & position.bit() != 0
    }

    /// No tokens at all, base or otherwise.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn has_guard(&self) -> bool {
        self.iter().any(Position::is_guard)
    }

    pub fn has_forward(&self) -> bool {
        self.iter().any(Position::is_forward)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PositionSet::default();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{}", joined)
    }
}
