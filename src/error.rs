//! Error handling module for the cube trainer
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library operations return [`Result`]; the binary edge and the config file
//! layer use `anyhow` for context chaining.

use thiserror::Error;

/// Main error type for the cube trainer
#[derive(Error, Debug)]
pub enum TrainerError {
    /// IO errors (terminal, output sinks, config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (move tokens, user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session state errors (recording without a camera, etc.)
    #[error("State error: {0}")]
    State(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The random source stopped producing acceptable moves
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

impl TrainerError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a random source error
    pub fn random_source(msg: impl Into<String>) -> Self {
        Self::RandomSource(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrainerError::config("frame interval out of range");
        assert_eq!(
            err.to_string(),
            "Configuration error: frame interval out of range"
        );

        let err = TrainerError::validation("unknown move token 'X'");
        assert_eq!(err.to_string(), "Validation error: unknown move token 'X'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TrainerError = io_err.into();
        assert!(matches!(err, TrainerError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = TrainerError::state("camera is not running");
        assert!(matches!(err, TrainerError::State(_)));

        let err = TrainerError::random_source("no acceptable move");
        assert!(matches!(err, TrainerError::RandomSource(_)));

        let err = TrainerError::terminal("raw mode");
        assert!(matches!(err, TrainerError::Terminal(_)));
    }
}
