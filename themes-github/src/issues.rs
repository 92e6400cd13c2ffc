//! Issue fetching for theme extraction

use async_trait::async_trait;
use octocrab::models::issues::Issue as OctocrabIssue;
use themes_core::{BoxError, ContextError, IssueSource, RequestContext, SourceIssue};
use tracing::debug;

use crate::{Error, GitHubClient, Result};

fn source_issue(issue: OctocrabIssue) -> SourceIssue {
    SourceIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        url: issue.html_url.to_string(),
    }
}

impl GitHubClient {
    /// Fetch a single issue, giving up when `ctx` is cancelled or expires
    pub async fn get_issue(
        &self,
        ctx: &RequestContext,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<SourceIssue> {
        if let Some(err) = ctx.err() {
            return Err(Error::Context(err));
        }

        debug!(org, repo, number, "Fetching issue");

        let handler = self.client().issues(org, repo);
        let fetch = handler.get(number);

        let issue = tokio::select! {
            biased;
            () = ctx.done() => {
                return Err(Error::Context(ctx.err().unwrap_or(ContextError::Cancelled)));
            }
            result = fetch => result.map_err(|e| match &e {
                octocrab::Error::GitHub { source, .. } if source.message.contains("Not Found") => {
                    Error::IssueNotFound {
                        org: org.to_string(),
                        repo: repo.to_string(),
                        number,
                    }
                }
                _ => Error::Api(e),
            })?,
        };

        Ok(source_issue(issue))
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_issue(
        &self,
        ctx: &RequestContext,
        org: &str,
        repo: &str,
        number: u64,
    ) -> std::result::Result<SourceIssue, BoxError> {
        Ok(self.get_issue(ctx, org, repo, number).await?)
    }
}
