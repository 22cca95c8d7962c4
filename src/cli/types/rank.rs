//! Sort keys for player rankings.

use std::cmp::Ordering;
use std::fmt;

use crate::optimizer::ScoredPlayer;

/// Which figure to rank players by, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RankBy {
    /// Weighted optimizer score
    #[default]
    Score,
    /// Average DraftKings points
    Projection,
    /// Points per $1k of salary
    Efficiency,
    /// Salary
    Salary,
}

impl RankBy {
    fn key(self, candidate: &ScoredPlayer<'_>) -> f64 {
        match self {
            RankBy::Score => candidate.score,
            RankBy::Projection => candidate.player.avg_dk,
            RankBy::Efficiency => candidate.player.efficiency,
            RankBy::Salary => f64::from(candidate.player.salary),
        }
    }

    /// Descending comparator for this key.
    pub fn compare(self, a: &ScoredPlayer<'_>, b: &ScoredPlayer<'_>) -> Ordering {
        self.key(b).total_cmp(&self.key(a))
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankBy::Score => "score",
            RankBy::Projection => "projection",
            RankBy::Efficiency => "efficiency",
            RankBy::Salary => "salary",
        };
        write!(f, "{}", s)
    }
}
