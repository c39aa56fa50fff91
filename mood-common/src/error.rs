//! Common error types for the mood service

use thiserror::Error;

/// Common result type for mood operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the mood crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request payload rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Polarity scoring failed
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Request payload validation failures
///
/// Surfaced to clients as a 4xx response; never fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `text` absent, empty, null or not a string
    #[error("No text provided")]
    MissingText,
}

/// Failures of the polarity scoring step
///
/// Surfaced to clients as a 5xx response carrying the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// The scoring engine itself reported a failure
    #[error("Scoring engine failed: {0}")]
    Engine(String),

    /// The engine returned NaN, infinity, or a value outside [-1.0, 1.0]
    #[error("Scoring engine returned invalid polarity: {0}")]
    InvalidScore(f64),

    /// The scoring call exceeded the configured timeout
    #[error("Scoring timed out after {0} ms")]
    Timeout(u64),

    /// The scoring task panicked or was cancelled
    #[error("Scoring task aborted: {0}")]
    Aborted(String),
}

impl ScoringError {
    /// Wrap any displayable engine failure
    pub fn engine(err: impl std::fmt::Display) -> Self {
        ScoringError::Engine(err.to_string())
    }
}
