use thiserror::Error;

/// Unified error type for git-version operations
#[derive(Error, Debug)]
pub enum GitVersionError {
    #[error("Version error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-version
pub type Result<T> = std::result::Result<T, GitVersionError>;

impl GitVersionError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitVersionError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionError::Config(msg.into())
    }
}
