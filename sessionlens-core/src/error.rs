//! Error types for sessionlens-core

use thiserror::Error;

/// Main error type for the sessionlens-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed log record
    #[error("record error: {0}")]
    Record(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for sessionlens-core
pub type Result<T> = std::result::Result<T, Error>;
