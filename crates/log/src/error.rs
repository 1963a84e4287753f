//! Logging errors.

/// Errors raised while building the logger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The level directive could not be parsed.
    #[error("invalid log filter `{0}`")]
    Filter(String),

    /// A global subscriber was already installed, or installing one failed.
    #[error("failed to initialize logger: {0}")]
    Init(String),
}

/// Result alias for logging setup.
pub type LogResult<T> = Result<T, LogError>;
