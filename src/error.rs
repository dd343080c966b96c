use thiserror::Error;

/// Unified error type for autorelease operations
#[derive(Error, Debug)]
pub enum AutoreleaseError {
    #[error("Invalid version format: {0}")]
    Version(String),

    #[error("Unparsable commit: {0}")]
    Commit(String),

    #[error("Could not find any releases")]
    NoReleases,

    #[error("Latest release is not referencing a commit: {0}")]
    ReleaseNotAnnotated(String),

    #[error("GitHub API request failed: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autorelease
pub type Result<T> = std::result::Result<T, AutoreleaseError>;

impl AutoreleaseError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutoreleaseError::Version(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        AutoreleaseError::Commit(msg.into())
    }

    /// Create an API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        AutoreleaseError::Api(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoreleaseError::Config(msg.into())
    }
}

impl From<ureq::Error> for AutoreleaseError {
    fn from(err: ureq::Error) -> Self {
        AutoreleaseError::Api(err.to_string())
    }
}
