//! Salary-cap lineup optimizer.
//!
//! Given a player pool and an [`OptimizerConfig`], [`optimize`] finds the
//! slot assignment with the highest total weighted score whose salaries fit
//! under the cap:
//!
//! 1. **Pool**: valid players are scored, ranked, and cut to the top K.
//! 2. **Candidates**: for each slot, the top N eligible pool players.
//! 3. **Search**: bounded exhaustive backtracking over the candidate lists.
//! 4. **Fallback**: a greedy pass when the search finds no complete lineup.
//!
//! Each call is a pure function of its inputs. Nothing is cached between calls,
//! so concurrent calls need no coordination (see [`sweep_caps`]).
//!
//! ```rust
//! use dk_lineup::{optimizer::optimize, OptimizerConfig, Player};
//!
//! let players = vec![
//!     Player::new("1", "Guard", "PG/SG", "BOS", 7000, 40.0, 5.7),
//!     Player::new("2", "Wing", "SF", "BOS", 6000, 32.0, 5.3),
//! ];
//! let config = OptimizerConfig::default().with_slots(vec!["G".parse()?, "F".parse()?]);
//! let lineup = optimize(&players, &config)?;
//! assert_eq!(lineup.player_ids(), vec!["1", "2"]);
//! # Ok::<(), dk_lineup::LineupError>(())
//! ```

pub mod eligibility;
pub mod greedy;
pub mod lineup;
pub mod scoring;
pub mod search;


use rayon::prelude::*;

use crate::{core::config::OptimizerConfig, draftkings::types::Player, LineupError, Result};

pub use eligibility::{can_play, is_eligible, SlotCandidates};
pub use lineup::{Lineup, LineupEntry, SearchOutcome};
pub use scoring::{build_pool, score_players, ScoredPlayer};

/// Build the highest-scoring lineup for `players` under `config`.
///
/// # Errors
///
/// - [`LineupError::InvalidConfig`] when the configuration fails validation
/// - [`LineupError::EmptyPool`] when no player survives validation
/// - [`LineupError::Infeasible`] when neither search nor greedy fallback can
///   place a single player
pub fn optimize(players: &[Player], config: &OptimizerConfig) -> Result<Lineup> {
    config.validate()?;

    let pool = build_pool(players, &config.weights, config.pool_size);
    if pool.is_empty() {
        return Err(LineupError::EmptyPool);
    }

    let candidates = SlotCandidates::build(&pool, &config.slots, config.per_slot);
    if candidates.any_empty() {
        tracing::debug!("a slot has no eligible candidates; exhaustive search cannot fill every slot");
    }
    let cap = u64::from(config.salary_cap);
    let result = search::exhaustive(&pool, &candidates, cap, config.max_nodes);

    if let Some(best) = result.best {
        let outcome = if result.budget_exhausted {
            tracing::info!(
                nodes = result.nodes,
                "search budget reached; returning best complete lineup found"
            );
            SearchOutcome::Truncated
        } else {
            SearchOutcome::Optimal
        };

        let entries = config
            .slots
            .iter()
            .zip(best)
            .map(|(&slot, idx)| LineupEntry::new(slot, &pool[idx]))
            .collect();

        let lineup = Lineup::assemble(entries, config.salary_cap, outcome, result.nodes);
        tracing::info!(
            score = lineup.total_score,
            salary = lineup.total_salary,
            nodes = result.nodes,
            ?outcome,
            "lineup found"
        );
        return Ok(lineup);
    }

    if result.budget_exhausted {
        tracing::warn!(nodes = result.nodes, "search budget exhausted before any complete lineup");
    }

    let picks = greedy::greedy_fill(&pool, &candidates, cap);
    if picks.is_empty() {
        return Err(LineupError::Infeasible {
            salary_cap: config.salary_cap,
        });
    }

    let outcome = SearchOutcome::Greedy {
        filled: picks.len(),
        total: config.slots.len(),
    };
    let entries = picks
        .into_iter()
        .map(|(slot_index, idx)| LineupEntry::new(config.slots[slot_index], &pool[idx]))
        .collect();
    let lineup = Lineup::assemble(entries, config.salary_cap, outcome, result.nodes);

    if lineup.is_partial() {
        tracing::warn!(
            filled = lineup.len(),
            slots = config.slots.len(),
            "greedy fallback filled only part of the lineup"
        );
    } else {
        tracing::info!(score = lineup.total_score, "greedy fallback filled every slot");
    }

    Ok(lineup)
}

/// Optimise the same pool under each salary cap, in parallel. Results come back
/// in the order of `caps`.
pub fn sweep_caps(
    players: &[Player],
    config: &OptimizerConfig,
    caps: &[u32],
) -> Vec<(u32, Result<Lineup>)> {
    caps.par_iter()
        .map(|&cap| {
            let config = config.clone().with_salary_cap(cap);
            (cap, optimize(players, &config))
        })
        .collect()
}
