//! GitHub API client using octocrab

use crate::{Error, Result};
use octocrab::Octocrab;
use themes_core::Secrets;
use tracing::{info, warn};

/// GitHub API client used as an issue source
///
/// The client is not tied to one repository; the target organization and
/// repository come with each request.
pub struct GitHubClient {
    client: Octocrab,
    authenticated: bool,
}

impl GitHubClient {
    /// Create a client with an optional personal access token
    ///
    /// Without a token requests are anonymous and subject to GitHub's lower
    /// unauthenticated rate limit.
    pub fn new(token: Option<String>) -> Result<Self> {
        let authenticated = token.is_some();

        let builder = Octocrab::builder();
        let builder = match token {
            Some(token) => builder.personal_token(token),
            None => {
                warn!("No GitHub token found, using anonymous access");
                builder
            }
        };

        let client = builder
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(authenticated, "Created GitHub client");

        Ok(Self {
            client,
            authenticated,
        })
    }

    /// Create a client using the token from the environment or secrets file
    ///
    /// Token is loaded from (in priority order):
    /// 1. GITHUB_TOKEN environment variable
    /// 2. ~/.config/themes/secrets.toml
    pub fn from_secrets() -> Result<Self> {
        let secrets = Secrets::load().map_err(|e| Error::Auth(e.to_string()))?;
        Self::new(secrets.github_token())
    }

    /// Whether requests carry a token
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

/// Parse a repository reference into organization and repository
///
/// Supports formats:
/// - owner/repo
/// - https://github.com/owner/repo
/// - git@github.com:owner/repo.git
pub fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    let path = if slug.starts_with("https://") || slug.starts_with("http://") {
        let url = url::Url::parse(slug).map_err(|e| Error::Parse(e.to_string()))?;
        url.path().to_string()
    } else if let Some(rest) = slug.strip_prefix("git@") {
        rest.split_once(':')
            .map(|(_, path)| path.to_string())
            .ok_or_else(|| Error::Parse(format!("Invalid SSH URL: {}", slug)))?
    } else {
        slug.to_string()
    };

    let path = path.trim_matches('/').trim_end_matches(".git");
    let mut parts = path.split('/').filter(|p| !p.is_empty());

    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            slug
        ))),
    }
}
