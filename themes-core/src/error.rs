//! Error types for theme extraction

use std::num::ParseIntError;

use thiserror::Error;

/// Boxed error produced by an issue source
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for theme operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for theme operations
#[derive(Error, Debug)]
pub enum Error {
    /// An identifier in the issue list is not a valid issue number
    #[error("Invalid issue number {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// The issue source failed to return an issue
    #[error("Failed to fetch issue #{number}: {source}")]
    Fetch {
        number: u64,
        #[source]
        source: BoxError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
