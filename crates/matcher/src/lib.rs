//! # bimatch matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the one-shot assignment solver (`assignment`).
//! A single solve of an unbalanced graph leaves some left ids unmatched even
//! when they have edges. This crate re-runs the solver on the residual graph
//! until every left id is either matched or provably stuck.
//!
//! ## Core Types
//!
//! - [`Matcher`]: holds a [`MatchConfig`] and drives the rounds.
//! - [`MatchConfig`]: round limit, right-id reuse policy and the
//!   [`SolverConfig`](assignment::SolverConfig) forwarded to each round.
//! - [`LeftMatching`]: accumulated matches plus every left id that could not
//!   be placed, each wrapped in a [`NoFeasiblePartner`].
//! - [`StopReason`]: why the run stopped issuing rounds.
//!
//! ## Residual graph
//!
//! After each round the next graph keeps only edges whose left id is still
//! unmatched and, unless `reuse_rights_across_rounds` is set, whose right id
//! was not consumed by an earlier round. The run stops when every left id is
//! matched, the residual graph is empty, or a round leaves exactly the same
//! left ids unmatched as the one before.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{match_all_left, Edge};
//!
//! let graph = vec![
//!     Edge::new("a", "b", 1.0),
//!     Edge::new("c", "b", 2.0),
//!     Edge::new("y", "z", 0.5),
//! ];
//! let result = match_all_left(&graph).unwrap();
//!
//! assert_eq!(result.into_pairs(), vec![("a", "b"), ("y", "z")]);
//! ```
//!
//! With `reuse_rights_across_rounds` the stuck id gets a second chance:
//!
//! ```
//! use matcher::{Edge, MatchConfig, Matcher};
//!
//! let graph = vec![Edge::new("a", "b", 1.0), Edge::new("c", "b", 2.0)];
//! let matcher = Matcher::new(MatchConfig::default().with_right_reuse(true));
//! let result = matcher.match_all_left(&graph).unwrap();
//!
//! assert!(result.is_complete());
//! assert_eq!(result.rounds.len(), 2);
//! ```
//!
//! ## Concurrency
//!
//! A run owns all of its state, so independent runs may execute in parallel
//! on any threads. [`Matcher::match_all_left_async`] moves each round onto
//! tokio's blocking pool and checks a cancellation flag between rounds.
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-round latency and per-run outcomes. This is typically done once
//! during service startup so all calls through [`Matcher`] share the same
//! metrics backend.

pub mod engine;
pub mod metrics;
pub mod offload;
pub mod types;

pub use assignment::{Edge, Pair};

pub use crate::engine::{match_all_left, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{
    LeftMatching, MatchConfig, MatchError, NoFeasiblePartner, RoundSummary, StopReason,
};
