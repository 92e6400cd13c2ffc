//! Issue source abstraction

use async_trait::async_trait;

use crate::{BoxError, RequestContext};

/// The parts of a tracker issue needed to build a theme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIssue {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Issue body, empty when the issue has none
    pub body: String,
    /// Reference URL of the issue
    pub url: String,
}

/// Trait for issue trackers that can return a single issue by number
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch one issue
    ///
    /// `ctx` is the caller's context, passed through unchanged. Errors are
    /// returned to the caller as-is.
    async fn fetch_issue(
        &self,
        ctx: &RequestContext,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<SourceIssue, BoxError>;
}
