//! Result type of a single solver call.

use serde::{Deserialize, Serialize};

use crate::edge::Pair;

/// Classification of every pair of a perfect assignment over the padded
/// matrix.
///
/// Each real left id lands in exactly one of `matches` / `unmatched_left`,
/// and each real right id in exactly one of `matches` / `unmatched_right`.
/// Landing in an unmatched list only says this round's optimum put the id
/// against a sentinel cell, not that it has no feasible partner at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolveOutcome<L, R> {
    pub matches: Vec<Pair<L, R>>,
    pub unmatched_left: Vec<L>,
    pub unmatched_right: Vec<R>,
    /// Dummy-row to dummy-column pairs that were dropped.
    pub discarded: usize,
    /// Side length of the padded square matrix.
    pub dimension: usize,
    /// Cost used for absent edges in this call.
    pub sentinel: f64,
}

impl<L, R> SolveOutcome<L, R> {
    /// Sum of the weights of the real matches.
    pub fn total_cost(&self) -> f64 {
        self.matches.iter().map(|p| p.weight).sum()
    }

    /// Matched `(left, right)` references.
    pub fn pairs(&self) -> impl Iterator<Item = (&L, &R)> {
        self.matches.iter().map(|p| (&p.left, &p.right))
    }

    pub fn is_left_complete(&self) -> bool {
        self.unmatched_left.is_empty()
    }
}
