//! Scenario errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for scenario operations
pub type Result<T> = core::result::Result<T, ScenarioError>;

/// Errors from loading or replaying a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Scenario file could not be read
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid TOML or does not match the schema
    #[error("invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scenario has no cycles to run
    #[error("scenario '{name}' has no cycles")]
    Empty { name: String },

    /// A cycle names a sensor channel that does not exist
    #[error("cycle {cycle}: unknown sensor '{name}'")]
    UnknownSensor { cycle: usize, name: String },

    /// A cycle names an actuator that does not exist
    #[error("cycle {cycle}: unknown actuator '{name}'")]
    UnknownActuator { cycle: usize, name: String },

    /// A cycle did not produce what the scenario expected
    #[error("scenario '{scenario}', cycle {cycle} ({label}): {detail}")]
    Mismatch {
        scenario: String,
        cycle: usize,
        label: String,
        detail: String,
    },
}
