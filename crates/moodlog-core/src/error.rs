//! Error types for moodlog-core

use thiserror::Error;

/// Result type alias using moodlog-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in moodlog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote table operation rejected by the server
    #[error("Remote operation failed: {0}")]
    Remote(String),

    /// No remote endpoint is configured for this session
    #[error("Remote persistence is not configured")]
    RemoteUnconfigured,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
