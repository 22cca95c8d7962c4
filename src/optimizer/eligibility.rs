//! Slot eligibility and per-slot candidate lists.

use crate::cli::types::{Position, PositionSet, Slot};

use super::scoring::ScoredPlayer;

/// Whether a player listed at `positions` may fill `slot`.
pub fn can_play(positions: &PositionSet, slot: Slot) -> bool {
    match slot {
        Slot::PG => positions.contains(Position::PG),
        Slot::SG => positions.contains(Position::SG),
        Slot::SF => positions.contains(Position::SF),
        Slot::PF => positions.contains(Position::PF),
        Slot::C => positions.contains(Position::C),
        Slot::G => positions.has_guard(),
        Slot::F => positions.has_forward(),
        Slot::UTIL => !positions.is_empty(),
    }
}

/// [`can_play`] for a raw listing such as `"PG/SG"`.
pub fn is_eligible(position: &str, slot: Slot) -> bool {
    can_play(&PositionSet::parse(position), slot)
}

/// Ranked candidate indices into the pool, one list per template slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCandidates {
    lists: Vec<Vec<usize>>,
}

impl SlotCandidates {
    /// Filter the ranked pool by eligibility for each slot and keep the top `per_slot`.
    pub fn build(pool: &[ScoredPlayer<'_>], slots: &[Slot], per_slot: usize) -> Self {
        let lists = slots
            .iter()
            .map(|&slot| {
                pool.iter()
                    .enumerate()
                    .filter(|(_, c)| can_play(&c.player.positions, slot))
                    .map(|(i, _)| i)
                    .take(per_slot)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        for (slot, list) in slots.iter().zip(&lists) {
            tracing::debug!(%slot, candidates = list.len(), "slot candidates");
        }

        Self { lists }
    }

    pub fn for_slot(&self, slot_index: usize) -> &[usize] {
        self.lists.get(slot_index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slot_count(&self) -> usize {
        self.lists.len()
    }

    pub fn any_empty(&self) -> bool {
        self.lists.iter().any(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScoreWeights;
    use crate::draftkings::types::Player;
    use crate::optimizer::scoring::build_pool;

    #[test]
    fn test_base_slots_require_exact_position() {
        assert!(is_eligible("PG", Slot::PG));
        assert!(!is_eligible("PG", Slot::SG));
        assert!(is_eligible("PF/C", Slot::C));
        assert!(is_eligible("PF/C", Slot::PF));
        assert!(!is_eligible("PF/C", Slot::SF));
    }

    #[test]
    fn test_combo_slots() {
        assert!(is_eligible("SG", Slot::G));
        assert!(is_eligible("PG", Slot::G));
        assert!(!is_eligible("SF", Slot::G));
        assert!(is_eligible("SF", Slot::F));
        assert!(is_eligible("SG/SF", Slot::F));
        assert!(!is_eligible("SG", Slot::F));
    }

    #[test]
    fn test_center_only_is_util_but_not_combo() {
        assert!(!is_eligible("C", Slot::G));
        assert!(!is_eligible("C", Slot::F));
        assert!(is_eligible("C", Slot::UTIL));
    }

    #[test]
    fn test_util_requires_a_position() {
        assert!(!is_eligible("", Slot::UTIL));
        assert!(!is_eligible(" / ", Slot::UTIL));
        assert!(is_eligible("SF", Slot::UTIL));
    }

    #[test]
    fn test_non_base_codes_only_fill_util() {
        assert!(is_eligible("G", Slot::UTIL));
        assert!(is_eligible("F/UTIL", Slot::UTIL));
        assert!(!is_eligible("G", Slot::G));
        assert!(!is_eligible("G", Slot::PG));
        assert!(!is_eligible("F/UTIL", Slot::F));
    }

    #[test]
    fn test_candidates_are_filtered_and_capped() {
        let mut players: Vec<Player> = (0..20)
            .map(|i| Player::new(format!("g{}", i), "Guard", "PG", "T", 4000, 40.0 - i as f64, 5.0))
            .collect();
        players.push(Player::new("c", "Center", "C", "T", 4000, 10.0, 2.0));

        let pool = build_pool(&players, &ScoreWeights::default(), 60);
        let slots = [Slot::PG, Slot::C, Slot::F, Slot::UTIL];
        let candidates = SlotCandidates::build(&pool, &slots, 12);

        assert_eq!(candidates.slot_count(), 4);
        assert_eq!(candidates.for_slot(0).len(), 12);
        // Ranked order is preserved
        assert_eq!(candidates.for_slot(0)[0], 0);
        assert_eq!(candidates.for_slot(1).len(), 1);
        assert_eq!(pool[candidates.for_slot(1)[0]].id(), "c");
        assert!(candidates.for_slot(2).is_empty());
        assert!(candidates.any_empty());
        assert_eq!(candidates.for_slot(3).len(), 12);
        assert!(candidates.for_slot(99).is_empty());
    }
}
