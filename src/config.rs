//! YAML Configuration File Support for bimatch
//!
//! Loads solver and matcher settings from a single YAML file so services can
//! tune a run without recompiling. Every field is optional; omitted fields
//! take the same defaults as [`SolverConfig::default`] and
//! [`MatchConfig::default`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # bimatch configuration
//! version: "1.0"
//! name: "nightly reconciliation"
//!
//! solver:
//!   version: 1
//!   sentinel_margin: 1.0
//!   use_parallel: false
//!
//! matcher:
//!   version: 1
//!   max_rounds: 16
//!   reuse_rights_across_rounds: false
//! ```

use std::fs;
use std::path::Path;

use assignment::SolverConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct BimatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Assignment solver configuration
    #[serde(default)]
    pub solver: SolverYamlConfig,

    /// Iterative matcher configuration
    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl BimatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: BimatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.solver_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("solver: {e}")))?;
        self.match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;

        Ok(())
    }

    /// Solver settings as the `assignment` layer sees them.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            version: self.solver.version,
            sentinel_margin: self.solver.sentinel_margin,
            use_parallel: self.solver.use_parallel,
        }
    }

    /// Matcher settings with the solver section folded in.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            version: self.matcher.version,
            max_rounds: self.matcher.max_rounds,
            reuse_rights_across_rounds: self.matcher.reuse_rights_across_rounds,
            solver: self.solver_config(),
        }
    }
}

impl Default for BimatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            solver: SolverYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Solver YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_sentinel_margin")]
    pub sentinel_margin: f64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl Default for SolverYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sentinel_margin: default_sentinel_margin(),
            use_parallel: false,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub max_rounds: Option<usize>,

    #[serde(default)]
    pub reuse_rights_across_rounds: bool,
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_rounds: None,
            reuse_rights_across_rounds: false,
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn default_sentinel_margin() -> f64 {
    1.0
}
