//! Error types for the simulation engine.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Board parameters that cannot produce a well-defined simulation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `cycle_frequency` was asked about a hash that was never recorded
    #[error("Cycle must exist: hash {hash:#010x} is not in the cycle memo")]
    CycleNotFound { hash: u32 },

    /// The background generation task panicked or was aborted
    #[error("Generation task failed: {0}")]
    TaskFailed(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<tokio::task::JoinError> for EngineError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskFailed(err.to_string())
    }
}
