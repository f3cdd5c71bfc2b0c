//! # bimatch assignment solver
//!
//! Minimum-cost one-to-one assignment over a weighted bipartite edge list.
//!
//! ## Contract
//!
//! - Input is an abstract list of [`Edge`]s `(left, right, weight)`. Ids are
//!   opaque hashable tokens; the solver knows nothing about what they stand
//!   for. A missing edge means "infeasible".
//! - [`solve`] is a pure function of its input: no I/O, no global state, and
//!   the cost matrix it builds is private to the call. Independent graphs can
//!   be solved concurrently; [`solve_batch`] does so on the rayon pool.
//! - The solver either returns a classification of a complete perfect
//!   assignment over the padded matrix or an [`AssignmentError`]. There is
//!   no partial result.
//!
//! ## Pipeline
//!
//! 1.  **Validation**: empty graphs and negative / non-finite weights are
//!     rejected before anything is allocated.
//! 2.  **Interning**: left and right ids are mapped to dense indices in order
//!     of first appearance.
//! 3.  **Padding**: a square `dim x dim` matrix (`dim = max(n_left,
//!     n_right)`) is filled with a sentinel strictly above every real
//!     weight, then real edges are written in.
//! 4.  **Kuhn-Munkres**: an `O(dim^3)` Hungarian solve yields a perfect
//!     assignment; see [`hungarian`].
//! 5.  **Classification**: each `(row, col)` pair becomes a match, an
//!     unmatched left and/or right id, or a discarded dummy pair.
//!
//! ## Example Usage
//!
//! ```
//! use assignment::{solve, Edge};
//!
//! let graph = vec![
//!     Edge::new("apple", "banana", 1.0),
//!     Edge::new("peanut", "banana", 2.0),
//! ];
//! let outcome = solve(&graph).unwrap();
//!
//! assert_eq!(outcome.pairs().collect::<Vec<_>>(), vec![(&"apple", &"banana")]);
//! assert_eq!(outcome.unmatched_left, vec!["peanut"]);
//! assert!(outcome.unmatched_right.is_empty());
//! ```
//!
pub mod config;
pub mod edge;
pub mod hungarian;
pub mod indexer;
pub mod matrix;
pub mod outcome;

use std::hash::Hash;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn, Level};

pub use crate::config::{AssignmentError, SolverConfig};
pub use crate::edge::{validate_graph, Edge, Pair};
pub use crate::indexer::IdIndex;
pub use crate::matrix::{sentinel_for, CostMatrix};
pub use crate::outcome::SolveOutcome;

/// Solve with [`SolverConfig::default`].
pub fn solve<L, R>(edges: &[Edge<L, R>]) -> Result<SolveOutcome<L, R>, AssignmentError>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    solve_with_config(edges, &SolverConfig::default())
}

/// Minimum-cost assignment of `edges` under `cfg`.
pub fn solve_with_config<L, R>(
    edges: &[Edge<L, R>],
    cfg: &SolverConfig,
) -> Result<SolveOutcome<L, R>, AssignmentError>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "assignment.solve", edges = edges.len());
    let _guard = span.enter();

    match solve_inner(edges, cfg) {
        Ok(outcome) => {
            debug!(
                dimension = outcome.dimension,
                matched = outcome.matches.len(),
                unmatched_left = outcome.unmatched_left.len(),
                unmatched_right = outcome.unmatched_right.len(),
                discarded = outcome.discarded,
                elapsed_micros = start.elapsed().as_micros(),
                "solve_success"
            );
            Ok(outcome)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "solve_failure"
            );
            Err(err)
        }
    }
}

/// Solve several unrelated graphs. Results come back in input order.
///
/// Runs on the rayon pool when `cfg.use_parallel` is set.
pub fn solve_batch<L, R>(
    graphs: &[Vec<Edge<L, R>>],
    cfg: &SolverConfig,
) -> Vec<Result<SolveOutcome<L, R>, AssignmentError>>
where
    L: Hash + Eq + Clone + Send + Sync,
    R: Hash + Eq + Clone + Send + Sync,
{
    if cfg.use_parallel {
        graphs
            .par_iter()
            .map(|graph| solve_with_config(graph, cfg))
            .collect()
    } else {
        graphs
            .iter()
            .map(|graph| solve_with_config(graph, cfg))
            .collect()
    }
}

fn solve_inner<L, R>(
    edges: &[Edge<L, R>],
    cfg: &SolverConfig,
) -> Result<SolveOutcome<L, R>, AssignmentError>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    cfg.validate()?;
    let max_weight = validate_graph(edges)?;
    let sentinel = sentinel_for(max_weight, cfg.sentinel_margin)?;

    let left = IdIndex::from_ids(edges.iter().map(|e| e.left.clone()));
    let right = IdIndex::from_ids(edges.iter().map(|e| e.right.clone()));
    let matrix = CostMatrix::from_edges(edges, &left, &right, sentinel);

    let assignment = hungarian::min_cost_assignment(&matrix);

    let mut matches = Vec::new();
    let mut unmatched_left = Vec::new();
    let mut unmatched_right = Vec::new();
    let mut discarded = 0usize;

    for (row, &col) in assignment.iter().enumerate() {
        match (left.id_at(row), right.id_at(col)) {
            (None, None) => discarded += 1,
            (Some(l), Some(r)) if !matrix.is_sentinel(row, col) => matches.push(Pair {
                left: l.clone(),
                right: r.clone(),
                weight: matrix.get(row, col),
            }),
            // Sentinel cell: each real side is reported on its own.
            (l, r) => {
                if let Some(l) = l {
                    unmatched_left.push(l.clone());
                }
                if let Some(r) = r {
                    unmatched_right.push(r.clone());
                }
            }
        }
    }

    Ok(SolveOutcome {
        matches,
        unmatched_left,
        unmatched_right,
        discarded,
        dimension: matrix.dim(),
        sentinel: matrix.sentinel(),
    })
}
