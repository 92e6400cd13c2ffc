//! Per-call request configuration built from option closures

use std::fmt;

use crate::RequestContext;

/// Organization hosting the enhancements tracker
pub const DEFAULT_ORG: &str = "kubernetes";

/// Repository holding the enhancement issues
pub const DEFAULT_REPO: &str = "enhancements";

/// Branch of the enhancements repository (not used by extraction)
pub const DEFAULT_BRANCH: &str = "master";

/// Mutator applied to a [`RequestConfig`] before a request is issued
pub type RequestOption = Box<dyn FnOnce(&mut RequestConfig) + Send>;

/// Resolved configuration for one extraction call
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Cancellation context passed to every fetch
    pub ctx: RequestContext,
    /// Target organization
    pub org: String,
    /// Target repository
    pub repo: String,
    /// Target branch
    pub branch: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            ctx: RequestContext::background(),
            org: DEFAULT_ORG.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl RequestConfig {
    /// Apply options in order on top of the defaults
    pub fn from_options(opts: impl IntoIterator<Item = RequestOption>) -> Self {
        let mut config = Self::default();
        for opt in opts {
            opt(&mut config);
        }
        config
    }
}

impl fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.org, self.repo, self.branch)
    }
}

/// Substitute the cancellation context
pub fn with_context(ctx: RequestContext) -> RequestOption {
    Box::new(move |c| c.ctx = ctx)
}

/// Target a different organization
pub fn with_org(org: impl Into<String>) -> RequestOption {
    let org = org.into();
    Box::new(move |c| c.org = org)
}

/// Target a different repository
pub fn with_repo(repo: impl Into<String>) -> RequestOption {
    let repo = repo.into();
    Box::new(move |c| c.repo = repo)
}

/// Target a different branch
pub fn with_branch(branch: impl Into<String>) -> RequestOption {
    let branch = branch.into();
    Box::new(move |c| c.branch = branch)
}
