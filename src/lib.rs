//! Workspace umbrella crate for bimatch.
//!
//! This crate stitches together the one-shot assignment solver and the
//! iterative left-exhaustion matcher so callers can go from a weighted edge
//! list (or a YAML config file) to a final matching with a single API entry
//! point.

pub mod config;

pub use assignment::{
    AssignmentError, Edge, Pair, SolveOutcome, SolverConfig, solve, solve_batch,
    solve_with_config,
};
pub use matcher::{
    LeftMatching, MatchConfig, MatchError, MatchMetrics, Matcher, NoFeasiblePartner,
    RoundSummary, StopReason, match_all_left, set_match_metrics,
};

pub use crate::config::{BimatchConfig, ConfigLoadError};

use std::error::Error;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::path::Path;
use std::time::Instant;

use tracing::{Level, info, warn};

/// Errors from the file-driven entry point, which can fail while loading the
/// configuration or while matching.
#[derive(Debug)]
pub enum BimatchError {
    Config(ConfigLoadError),
    Match(MatchError),
}

impl fmt::Display for BimatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BimatchError::Config(err) => write!(f, "configuration failure: {err}"),
            BimatchError::Match(err) => write!(f, "matching failed: {err}"),
        }
    }
}

impl Error for BimatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BimatchError::Config(err) => Some(err),
            BimatchError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for BimatchError {
    fn from(value: ConfigLoadError) -> Self {
        BimatchError::Config(value)
    }
}

impl From<MatchError> for BimatchError {
    fn from(value: MatchError) -> Self {
        BimatchError::Match(value)
    }
}

/// Match every left id of `edges` using default configuration.
pub fn match_graph<L, R>(edges: &[Edge<L, R>]) -> Result<LeftMatching<L, R>, MatchError>
where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
{
    match_all_left(edges)
}

/// Pipeline helper that accepts a loaded [`BimatchConfig`].
pub fn match_graph_with_config<L, R>(
    edges: &[Edge<L, R>],
    cfg: &BimatchConfig,
) -> Result<LeftMatching<L, R>, MatchError>
where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
{
    Matcher::new(cfg.match_config()).match_all_left(edges)
}

/// Load a YAML config from `path` and match `edges` with it.
pub fn match_graph_from_file<L, R, P>(
    edges: &[Edge<L, R>],
    path: P,
) -> Result<LeftMatching<L, R>, BimatchError>
where
    L: Hash + Eq + Clone + Debug,
    R: Hash + Eq + Clone,
    P: AsRef<Path>,
{
    let start = Instant::now();
    let path = path.as_ref();

    let cfg = match BimatchConfig::from_file(path) {
        Ok(cfg) => cfg,
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(path = %path.display(), error = %err, elapsed_micros, "config_load_failure");
            return Err(err.into());
        }
    };

    let span = tracing::span!(
        Level::INFO,
        "bimatch.match_graph_from_file",
        config = ?cfg.name,
        edges = edges.len()
    );
    let _guard = span.enter();

    match match_graph_with_config(edges, &cfg) {
        Ok(result) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                matched = result.matches.len(),
                unmatched = result.unmatched.len(),
                stop = ?result.stop,
                elapsed_micros,
                "match_graph_success"
            );
            Ok(result)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "match_graph_failure");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_b() -> Vec<Edge<&'static str, &'static str>> {
        vec![
            Edge::new("a", "b", 1.0),
            Edge::new("c", "b", 2.0),
            Edge::new("y", "z", 10.0),
            Edge::new("y", "zz", 100.0),
        ]
    }

    #[test]
    fn match_graph_uses_defaults() {
        let result = match_graph(&scenario_b()).expect("match");
        assert_eq!(result.into_pairs(), vec![("a", "b"), ("y", "z")]);
    }

    #[test]
    fn match_graph_with_config_honours_reuse() {
        let cfg = BimatchConfig::from_yaml(
            "version: \"1.0\"\nmatcher:\n  reuse_rights_across_rounds: true\n",
        )
        .expect("config");
        let result = match_graph_with_config(&scenario_b(), &cfg).expect("match");
        assert!(result.is_complete());
        assert_eq!(result.matches.len(), 3);
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = match_graph_from_file(&scenario_b(), "/nonexistent/bimatch.yaml")
            .expect_err("missing file");
        assert!(matches!(err, BimatchError::Config(ConfigLoadError::FileRead(_))));
        assert!(err.to_string().starts_with("configuration failure"));
        assert!(err.source().is_some());
    }

    #[test]
    fn loaded_config_with_empty_graph_is_a_match_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"version: \"1.0\"\nname: \"empty\"\n")
            .expect("write config");

        let edges: Vec<Edge<&str, &str>> = Vec::new();
        let err = match_graph_from_file(&edges, file.path()).expect_err("empty graph");
        assert!(matches!(
            err,
            BimatchError::Match(MatchError::Assignment(AssignmentError::EmptyGraph))
        ));
        assert!(err.to_string().starts_with("matching failed"));
    }

    #[test]
    fn empty_graph_is_a_match_error() {
        let edges: Vec<Edge<String, String>> = Vec::new();
        let err = BimatchError::from(match_graph(&edges).expect_err("empty graph"));
        assert!(matches!(
            err,
            BimatchError::Match(MatchError::Assignment(AssignmentError::EmptyGraph))
        ));
    }
}
