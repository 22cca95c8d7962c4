//! Greedy fallback used when exhaustive search yields nothing.

use std::collections::HashSet;

use super::{eligibility::SlotCandidates, scoring::ScoredPlayer};

/// Fill slots in template order with the first unused candidate that still fits
/// the remaining budget. Slots with no such candidate are skipped.
///
/// Returns `(slot_index, pool_index)` pairs for the slots that were filled.
pub fn greedy_fill(
    pool: &[ScoredPlayer<'_>],
    candidates: &SlotCandidates,
    salary_cap: u64,
) -> Vec<(usize, usize)> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut salary = 0u64;
    let mut picks = Vec::with_capacity(candidates.slot_count());

    for slot_index in 0..candidates.slot_count() {
        let pick = candidates.for_slot(slot_index).iter().copied().find(|&idx| {
            let candidate = &pool[idx];
            !used.contains(candidate.id()) && salary + u64::from(candidate.salary()) <= salary_cap
        });

        match pick {
            Some(idx) => {
                used.insert(pool[idx].id());
                salary += u64::from(pool[idx].salary());
                picks.push((slot_index, idx));
            }
            None => tracing::debug!(slot_index, "greedy fallback left slot empty"),
        }
    }

    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Slot;
    use crate::core::config::ScoreWeights;
    use crate::draftkings::types::Player;
    use crate::optimizer::scoring::build_pool;

    #[test]
    fn test_greedy_skips_slots_it_cannot_fill() {
        let players = vec![
            Player::new("pg", "PG", "PG", "T", 5000, 30.0, 6.0),
            Player::new("c", "C", "C", "T", 5000, 25.0, 5.0),
        ];
        let pool = build_pool(&players, &ScoreWeights::default(), 60);
        let slots = [Slot::PG, Slot::G, Slot::C, Slot::UTIL];
        let candidates = SlotCandidates::build(&pool, &slots, 12);

        let picks = greedy_fill(&pool, &candidates, 50_000);
        let filled: Vec<(usize, &str)> = picks.iter().map(|&(s, i)| (s, pool[i].id())).collect();
        // G has only the used PG, UTIL has nobody left
        assert_eq!(filled, vec![(0, "pg"), (2, "c")]);
    }

    #[test]
    fn test_greedy_respects_remaining_budget() {
        let players = vec![
            Player::new("big", "Big", "PG", "T", 8000, 50.0, 6.0),
            Player::new("cheap", "Cheap", "SG", "T", 2000, 10.0, 5.0),
            Player::new("pricey", "Pricey", "SG", "T", 7000, 40.0, 5.7),
        ];
        let pool = build_pool(&players, &ScoreWeights::default(), 60);
        let slots = [Slot::PG, Slot::SG];
        let candidates = SlotCandidates::build(&pool, &slots, 12);

        let picks = greedy_fill(&pool, &candidates, 10_000);
        let ids: Vec<&str> = picks.iter().map(|&(_, i)| pool[i].id()).collect();
        assert_eq!(ids, vec!["big", "cheap"]);
    }

    #[test]
    fn test_greedy_nothing_fits() {
        let players = vec![Player::new("x", "X", "C", "T", 60_000, 50.0, 1.0)];
        let pool = build_pool(&players, &ScoreWeights::default(), 60);
        let candidates = SlotCandidates::build(&pool, &[Slot::C], 12);

        assert!(greedy_fill(&pool, &candidates, 50_000).is_empty());
    }
}
