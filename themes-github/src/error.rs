//! Error types for GitHub operations

use themes_core::ContextError;
use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Issue not found
    #[error("Issue {org}/{repo}#{number} not found")]
    IssueNotFound {
        org: String,
        repo: String,
        number: u64,
    },

    /// The request context was cancelled or timed out
    #[error("GitHub request aborted: {0}")]
    Context(#[from] ContextError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}
