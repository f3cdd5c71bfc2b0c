//! Square cost matrix padded with sentinel cells.
//!
//! Rows are left ids, columns are right ids. The matrix is always
//! `dim x dim` with `dim = max(rows, cols)`; any cell without a real edge,
//! including every cell of a dummy row or column, holds the sentinel.

use std::hash::Hash;

use crate::config::AssignmentError;
use crate::edge::Edge;
use crate::indexer::IdIndex;

/// Sentinel for a graph whose heaviest edge is `max_weight`.
///
/// Normally `max_weight + margin`. When the margin is lost to rounding, the
/// next candidates are `2 * max_weight` and then the next representable
/// `f64` above it. Fails only when no finite value exceeds `max_weight`,
/// since a sentinel equal to a real weight would make that edge look absent.
pub fn sentinel_for(max_weight: f64, margin: f64) -> Result<f64, AssignmentError> {
    [max_weight + margin, max_weight * 2.0, max_weight.next_up()]
        .into_iter()
        .find(|candidate| candidate.is_finite() && *candidate > max_weight)
        .ok_or(AssignmentError::SentinelOverflow { max_weight })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    dim: usize,
    sentinel: f64,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Build the padded matrix. Ids missing from either index are ignored;
    /// a repeated `(left, right)` pair keeps the last weight seen.
    pub fn from_edges<L, R>(
        edges: &[Edge<L, R>],
        left: &IdIndex<L>,
        right: &IdIndex<R>,
        sentinel: f64,
    ) -> Self
    where
        L: Hash + Eq + Clone,
        R: Hash + Eq + Clone,
    {
        let dim = left.len().max(right.len());
        let mut cells = vec![sentinel; dim * dim];

        for edge in edges {
            if let (Some(r), Some(c)) = (left.index_of(&edge.left), right.index_of(&edge.right)) {
                cells[r * dim + c] = edge.weight;
            }
        }

        Self {
            dim,
            sentinel,
            cells,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.dim + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.dim..(row + 1) * self.dim]
    }

    pub fn is_sentinel(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == self.sentinel
    }
}
