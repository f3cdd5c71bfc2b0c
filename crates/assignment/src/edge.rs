//! Weighted bipartite edges and input validation.

use serde::{Deserialize, Serialize};

use crate::config::AssignmentError;

/// A candidate pairing between a left node and a right node.
///
/// `weight` is a cost: lower is preferred. Only feasible pairings should be
/// present; an absent edge is how infeasibility is expressed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge<L, R> {
    pub left: L,
    pub right: R,
    pub weight: f64,
}

impl<L, R> Edge<L, R> {
    pub fn new(left: L, right: R, weight: f64) -> Self {
        Self {
            left,
            right,
            weight,
        }
    }
}

impl<L, R> From<(L, R, f64)> for Edge<L, R> {
    fn from((left, right, weight): (L, R, f64)) -> Self {
        Self::new(left, right, weight)
    }
}

/// A selected pairing together with the weight of the edge that backs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pair<L, R> {
    pub left: L,
    pub right: R,
    pub weight: f64,
}

impl<L, R> Pair<L, R> {
    /// Drop the weight and return the `(left, right)` tuple.
    pub fn into_tuple(self) -> (L, R) {
        (self.left, self.right)
    }
}

/// Check that `edges` is non-empty and every weight is finite and
/// non-negative. Returns the largest weight.
pub fn validate_graph<L, R>(edges: &[Edge<L, R>]) -> Result<f64, AssignmentError> {
    if edges.is_empty() {
        return Err(AssignmentError::EmptyGraph);
    }

    let mut max_weight = 0.0_f64;
    for (index, edge) in edges.iter().enumerate() {
        let weight = edge.weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(AssignmentError::InvalidWeight { index, weight });
        }
        if weight > max_weight {
            max_weight = weight;
        }
    }
    Ok(max_weight)
}
