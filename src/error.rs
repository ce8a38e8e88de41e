use thiserror::Error;

/// Unified error type for git-autobump operations
#[derive(Error, Debug)]
pub enum AutobumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-autobump
pub type Result<T> = std::result::Result<T, AutobumpError>;

impl AutobumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutobumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutobumpError::Version(msg.into())
    }

    /// Create a store error with context
    pub fn store(msg: impl Into<String>) -> Self {
        AutobumpError::Store(msg.into())
    }
}
