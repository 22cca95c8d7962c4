//! Exhaustive backtracking search over the per-slot candidate lists.
//!
//! Slots are filled in template order. At each level every candidate for the
//! slot is tried in ranked order, skipping players already used and players
//! whose salary would break the cap; the used set and working lineup are undone
//! on the way back up. A complete lineup replaces the best one only when its
//! score is strictly greater, so the first optimum found wins ties.
//!
//! Optimality holds relative to the truncated pools only (top K overall, top N
//! per slot). An optional node budget bounds the work on adversarial inputs.

use std::collections::HashSet;

use super::{eligibility::SlotCandidates, scoring::ScoredPlayer};

/// What the exhaustive search found.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Pool indices of the best lineup, one per template slot.
    pub best: Option<Vec<usize>>,
    pub best_score: f64,
    /// Candidate placements tried.
    pub nodes: u64,
    /// The node budget ran out before the search space was covered.
    pub budget_exhausted: bool,
}

struct Search<'p, 'a> {
    pool: &'p [ScoredPlayer<'a>],
    candidates: &'p SlotCandidates,
    salary_cap: u64,
    max_nodes: Option<u64>,
    nodes: u64,
    budget_exhausted: bool,
    used: HashSet<&'a str>,
    current: Vec<usize>,
    best: Option<Vec<usize>>,
    best_score: f64,
}

impl<'p, 'a> Search<'p, 'a> {
    fn descend(&mut self, depth: usize, salary: u64, score: f64) {
        if depth == self.candidates.slot_count() {
            if salary <= self.salary_cap && score > self.best_score {
                self.best_score = score;
                self.best = Some(self.current.clone());
            }
            return;
        }

        let candidates = self.candidates;
        let pool = self.pool;
        for &idx in candidates.for_slot(depth) {
            let candidate = &pool[idx];
            if self.used.contains(candidate.id()) {
                continue;
            }
            let next_salary = salary + u64::from(candidate.salary());
            if next_salary > self.salary_cap {
                continue;
            }

            if let Some(limit) = self.max_nodes {
                if self.nodes >= limit {
                    self.budget_exhausted = true;
                    return;
                }
            }
            self.nodes += 1;

            self.used.insert(candidate.id());
            self.current.push(idx);

            self.descend(depth + 1, next_salary, score + candidate.score);

            self.current.pop();
            self.used.remove(candidate.id());

            if self.budget_exhausted {
                return;
            }
        }
    }
}

/// Search every combination of per-slot candidates for the highest-scoring
/// lineup within `salary_cap`.
pub fn exhaustive(
    pool: &[ScoredPlayer<'_>],
    candidates: &SlotCandidates,
    salary_cap: u64,
    max_nodes: Option<u64>,
) -> SearchResult {
    let mut search = Search {
        pool,
        candidates,
        salary_cap,
        max_nodes,
        nodes: 0,
        budget_exhausted: false,
        used: HashSet::new(),
        current: Vec::with_capacity(candidates.slot_count()),
        best: None,
        best_score: f64::NEG_INFINITY,
    };

    search.descend(0, 0, 0.0);

    tracing::debug!(
        nodes = search.nodes,
        found = search.best.is_some(),
        budget_exhausted = search.budget_exhausted,
        "exhaustive search finished"
    );

    SearchResult {
        best: search.best,
        best_score: search.best_score,
        nodes: search.nodes,
        budget_exhausted: search.budget_exhausted,
    }
}
