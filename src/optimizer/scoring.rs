//! Weighted scoring and candidate pool construction.

use crate::{core::config::ScoreWeights, draftkings::types::Player};

/// A valid player annotated with its weighted score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPlayer<'a> {
    pub player: &'a Player,
    pub score: f64,
}

impl<'a> ScoredPlayer<'a> {
    pub fn new(player: &'a Player, weights: &ScoreWeights) -> Self {
        Self {
            player,
            score: weights.score(player.avg_dk, player.efficiency),
        }
    }

    pub fn id(&self) -> &'a str {
        &self.player.id
    }

    pub fn salary(&self) -> u32 {
        self.player.salary
    }
}

/// Score every valid player and rank them best first.
///
/// The sort is stable, so players with equal scores keep their input order.
pub fn score_players<'a>(players: &'a [Player], weights: &ScoreWeights) -> Vec<ScoredPlayer<'a>> {
    let mut scored: Vec<ScoredPlayer<'a>> = players
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| ScoredPlayer::new(p, weights))
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// The top `pool_size` ranked players; everyone when fewer are valid.
pub fn build_pool<'a>(
    players: &'a [Player],
    weights: &ScoreWeights,
    pool_size: usize,
) -> Vec<ScoredPlayer<'a>> {
    let mut pool = score_players(players, weights);
    let valid = pool.len();
    pool.truncate(pool_size);

    tracing::debug!(
        input = players.len(),
        valid,
        pool = pool.len(),
        "built candidate pool"
    );
    pool
}
