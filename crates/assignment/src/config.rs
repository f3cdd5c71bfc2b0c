//! Configuration and error types for the assignment solver.
//!
//! The solver is a pure function of `(edges, config)`: nothing in this module
//! reads the environment or touches process-wide state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning knobs for a single [`crate::solve_with_config`] call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Amount added to the largest edge weight to form the sentinel cost.
    ///
    /// Only strict dominance over every real weight matters, so any positive
    /// finite value works. The default of `1.0` mirrors the classical
    /// `max + 1` convention.
    pub sentinel_margin: f64,
    /// Solve independent graphs on the rayon pool in [`crate::solve_batch`].
    pub use_parallel: bool,
}

impl SolverConfig {
    /// Create a new configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentinel margin.
    pub fn with_sentinel_margin(mut self, margin: f64) -> Self {
        self.sentinel_margin = margin;
        self
    }

    /// Enable or disable parallel batch solving.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self.version < 1 {
            return Err(AssignmentError::InvalidConfig(format!(
                "version must be >= 1 (got {})",
                self.version
            )));
        }
        if !self.sentinel_margin.is_finite() || self.sentinel_margin <= 0.0 {
            return Err(AssignmentError::InvalidConfig(format!(
                "sentinel_margin must be finite and > 0 (got {})",
                self.sentinel_margin
            )));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sentinel_margin: 1.0,
            use_parallel: false,
        }
    }
}

/// Errors returned by the assignment solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignmentError {
    /// `solve` was handed zero edges; there is no maximum weight and no matrix.
    #[error("cannot solve an empty graph")]
    EmptyGraph,

    /// An edge weight was negative, NaN or infinite.
    #[error("invalid weight {weight} on edge #{index}: weights must be finite and >= 0")]
    InvalidWeight { index: usize, weight: f64 },

    /// No finite `f64` lies strictly above `max_weight`.
    #[error("cannot build a sentinel above max weight {max_weight}")]
    SentinelOverflow { max_weight: f64 },

    #[error("invalid solver config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.sentinel_margin, 1.0);
        assert!(!cfg.use_parallel);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let cfg = SolverConfig::new()
            .with_sentinel_margin(0.25)
            .with_parallel(true);
        assert_eq!(cfg.sentinel_margin, 0.25);
        assert!(cfg.use_parallel);
    }

    #[test]
    fn config_validate_rejects_non_positive_margin() {
        for margin in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = SolverConfig::new().with_sentinel_margin(margin);
            match cfg.validate() {
                Err(AssignmentError::InvalidConfig(msg)) => {
                    assert!(msg.contains("sentinel_margin"))
                }
                other => panic!("margin {margin} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn config_validate_rejects_version_zero() {
        let cfg = SolverConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(AssignmentError::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = SolverConfig::new().with_sentinel_margin(3.5);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn error_display_mentions_details() {
        let err = AssignmentError::InvalidWeight {
            index: 3,
            weight: -2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("-2"));
        assert_eq!(
            AssignmentError::EmptyGraph.to_string(),
            "cannot solve an empty graph"
        );
    }
}
