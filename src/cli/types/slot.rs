//! Roster slot types for DraftKings NBA classic contests.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named roster slot to be filled by exactly one player.
///
/// The five base slots take players listed at that position, `G` and `F`
/// take either guard or either forward, and `UTIL` takes anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    PG,
    SG,
    SF,
    PF,
    C,
    G,
    F,
    UTIL,
}

impl Slot {
    /// The DraftKings NBA classic template, in search order.
    pub const CLASSIC: [Slot; 8] = [
        Slot::PG,
        Slot::SG,
        Slot::SF,
        Slot::PF,
        Slot::C,
        Slot::G,
        Slot::F,
        Slot::UTIL,
    ];

    pub fn classic_template() -> Vec<Slot> {
        Self::CLASSIC.to_vec()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Slot::PG => "PG",
            Slot::SG => "SG",
            Slot::SF => "SF",
            Slot::PF => "PF",
            Slot::C => "C",
            Slot::G => "G",
            Slot::F => "F",
            Slot::UTIL => "UTIL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Slot {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Slot::PG),
            "SG" => Ok(Slot::SG),
            "SF" => Ok(Slot::SF),
            "PF" => Ok(Slot::PF),
            "C" => Ok(Slot::C),
            "G" => Ok(Slot::G),
            "F" => Ok(Slot::F),
            "UTIL" | "U" => Ok(Slot::UTIL),
            _ => Err(LineupError::InvalidSlot {
                slot: s.to_string(),
            }),
        }
    }
}
