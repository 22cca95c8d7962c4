//! Lineup result types and aggregation.

use serde::Serialize;

use crate::{cli::types::Slot, draftkings::types::Player};

use super::scoring::ScoredPlayer;

/// How the returned lineup was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Exhaustive search covered the whole (truncated) search space.
    Optimal,
    /// The node budget ran out; this is the best complete lineup seen before that.
    /// Every slot is filled. Full slates under the default budget usually end
    /// here, and only `--unbounded` can prove the lineup optimal.
    Truncated,
    /// Exhaustive search found nothing and the greedy pass filled `filled` of `total` slots.
    Greedy { filled: usize, total: usize },
}

/// A player assigned to a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupEntry {
    pub slot: Slot,
    #[serde(flatten)]
    pub player: Player,
    /// Weighted score the optimizer ranked this player by.
    pub score: f64,
}

impl LineupEntry {
    pub fn new(slot: Slot, candidate: &ScoredPlayer<'_>) -> Self {
        Self {
            slot,
            player: candidate.player.clone(),
            score: candidate.score,
        }
    }
}

/// The optimizer's output: the assigned slots plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub lineup: Vec<LineupEntry>,
    pub total_salary: u64,
    /// Sum of avgDK.
    pub total_projection: f64,
    /// Sum of efficiency.
    pub total_secondary_value: f64,
    pub total_score: f64,
    pub salary_cap: u32,
    pub outcome: SearchOutcome,
    pub nodes_visited: u64,
}

impl Lineup {
    pub fn assemble(
        lineup: Vec<LineupEntry>,
        salary_cap: u32,
        outcome: SearchOutcome,
        nodes_visited: u64,
    ) -> Self {
        let total_salary = lineup.iter().map(|e| u64::from(e.player.salary)).sum();
        let total_projection = lineup.iter().map(|e| e.player.avg_dk).sum();
        let total_secondary_value = lineup.iter().map(|e| e.player.efficiency).sum();
        let total_score = lineup.iter().map(|e| e.score).sum();

        Self {
            lineup,
            total_salary,
            total_projection,
            total_secondary_value,
            total_score,
            salary_cap,
            outcome,
            nodes_visited,
        }
    }

    /// Greedy output that left at least one slot empty: usable, but degraded.
    pub fn is_partial(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Greedy { filled, total } if filled < total)
    }

    pub fn len(&self) -> usize {
        self.lineup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineup.is_empty()
    }

    pub fn player_ids(&self) -> Vec<&str> {
        self.lineup.iter().map(|e| e.player.id.as_str()).collect()
    }

    pub fn remaining_salary(&self) -> i64 {
        i64::from(self.salary_cap) - self.total_salary as i64
    }
}
