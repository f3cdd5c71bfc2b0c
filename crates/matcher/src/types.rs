use assignment::{AssignmentError, Pair, SolverConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for an iterative left-exhaustion run.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Stop after this many solver rounds even if work remains. Left ids not
    /// resolved by then are reported as pending, not as infeasible.
    #[serde(default)]
    pub max_rounds: Option<usize>,
    /// Let later rounds pair left ids with right ids already matched in an
    /// earlier round. Within one round a right id is still used at most once.
    #[serde(default)]
    pub reuse_rights_across_rounds: bool,
    /// Settings forwarded to every solver call.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_right_reuse(mut self, reuse: bool) -> Self {
        self.reuse_rights_across_rounds = reuse;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Validate the configuration for a single run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig("version must be >= 1".into()));
        }
        if self.max_rounds == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_rounds must be greater than zero".into(),
            ));
        }
        self.solver
            .validate()
            .map_err(|e| MatchError::InvalidConfig(format!("solver: {e}")))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            max_rounds: None,
            reuse_rights_across_rounds: false,
            solver: SolverConfig::default(),
        }
    }
}

/// Why a run stopped issuing solver rounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every left id was matched.
    Exhausted,
    /// The residual graph had no edges left.
    NoRemainingEdges,
    /// A round left exactly the same left ids unmatched as the round before.
    NoProgress,
    /// `max_rounds` was reached.
    RoundLimit,
    /// The caller's cancellation flag was set before a round started.
    Cancelled,
}

impl StopReason {
    /// Whether left ids still unmatched at this stop are known to be stuck.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            StopReason::Exhausted | StopReason::NoRemainingEdges | StopReason::NoProgress
        )
    }
}

/// Per-round bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: usize,
    /// Edges in the residual graph handed to the solver.
    pub edges: usize,
    pub matched: usize,
    pub unmatched_left: usize,
    /// Sum of matched weights in this round.
    pub cost: f64,
}

/// A left id that no round could place: every edge it had was either
/// consumed by someone else or the run made no further progress.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("no feasible partner for left node {left:?} after {rounds} round(s)")]
pub struct NoFeasiblePartner<L: std::fmt::Debug> {
    pub left: L,
    pub rounds: usize,
}

/// Everything a run produced, including the ids it could not place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeftMatching<L: std::fmt::Debug, R> {
    /// Matches from every round, in round order.
    pub matches: Vec<Pair<L, R>>,
    /// Left ids that are definitively stuck.
    pub unmatched: Vec<NoFeasiblePartner<L>>,
    /// Left ids left unresolved because the run was cut short.
    pub pending: Vec<L>,
    pub rounds: Vec<RoundSummary>,
    pub stop: StopReason,
}

impl<L: std::fmt::Debug, R> LeftMatching<L, R> {
    pub fn pairs(&self) -> impl Iterator<Item = (&L, &R)> {
        self.matches.iter().map(|p| (&p.left, &p.right))
    }

    pub fn into_pairs(self) -> Vec<(L, R)> {
        self.matches.into_iter().map(Pair::into_tuple).collect()
    }

    pub fn total_cost(&self) -> f64 {
        self.matches.iter().map(|p| p.weight).sum()
    }

    /// True when every left id in the input was matched.
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty() && self.pending.is_empty()
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid run configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// A solver round failed (empty graph, bad weight, ...).
    #[error("assignment error: {0}")]
    Assignment(#[from] AssignmentError),
    /// A blocking worker running a round panicked or was aborted.
    #[error("solver worker failed: {0}")]
    Worker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.max_rounds.is_none());
        assert!(!cfg.reuse_rights_across_rounds);
    }

    #[test]
    fn zero_round_limit_rejected() {
        let cfg = MatchConfig::default().with_max_rounds(0);
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_rounds")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_solver_config_rejected() {
        let cfg = MatchConfig::default().with_solver(SolverConfig::new().with_sentinel_margin(-1.0));
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("sentinel_margin")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: MatchConfig = serde_json::from_str(r#"{"max_rounds": 3}"#).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.max_rounds, Some(3));
        assert_eq!(cfg.solver, SolverConfig::default());
    }

    #[test]
    fn no_feasible_partner_display() {
        let err = NoFeasiblePartner {
            left: "c",
            rounds: 2,
        };
        assert_eq!(
            err.to_string(),
            "no feasible partner for left node \"c\" after 2 round(s)"
        );
    }

    #[test]
    fn stop_reason_finality() {
        assert!(StopReason::NoProgress.is_final());
        assert!(StopReason::Exhausted.is_final());
        assert!(!StopReason::Cancelled.is_final());
        assert!(!StopReason::RoundLimit.is_final());
    }
}
