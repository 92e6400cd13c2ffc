//! Theme extraction from a list of enhancement issues

use tracing::{debug, info};

use crate::extract::BodyFields;
use crate::{Error, IssueSource, RequestConfig, RequestOption, Result, SourceIssue, ThemeRecord};

/// Produce the fully contextualized major themes for a list of issue numbers
///
/// Entry point used by the CLI; see [`list_themes`].
pub async fn list_major_themes<S>(
    source: &S,
    themes: &str,
    opts: impl IntoIterator<Item = RequestOption>,
) -> Result<Vec<ThemeRecord>>
where
    S: IssueSource + ?Sized,
{
    list_themes(source, themes, opts).await
}

/// Fetch each issue in a comma-separated list and build its theme record
///
/// Issues are fetched one at a time in input order. The first invalid
/// number or failed fetch aborts the whole call; no partial list is
/// returned.
pub async fn list_themes<S>(
    source: &S,
    issue_list_csv: &str,
    opts: impl IntoIterator<Item = RequestOption>,
) -> Result<Vec<ThemeRecord>>
where
    S: IssueSource + ?Sized,
{
    let config = RequestConfig::from_options(opts);
    debug!(target_repo = %config, issues = issue_list_csv, "Listing major themes");

    let mut themes = Vec::new();

    for token in issue_list_csv.split(',') {
        let number = parse_issue_number(token)?;

        debug!(number, "Fetching theme issue");
        let issue = source
            .fetch_issue(&config.ctx, &config.org, &config.repo, number)
            .await
            .map_err(|source| Error::Fetch { number, source })?;

        themes.push(theme_from_issue(number, issue));
    }

    info!(count = themes.len(), "Extracted major themes");

    Ok(themes)
}

fn parse_issue_number(token: &str) -> Result<u64> {
    token.trim().parse().map_err(|source| Error::Parse {
        token: token.to_string(),
        source,
    })
}

fn theme_from_issue(number: u64, issue: SourceIssue) -> ThemeRecord {
    let fields = BodyFields::parse(&issue.body);
    ThemeRecord {
        issue_number: number,
        issue_title: issue.title,
        issue_url: issue.url,
        text: fields.text,
        design_doc_number: fields.design_doc_number,
        design_doc_url: fields.design_doc_url,
        responsible_groups: fields.responsible_groups,
    }
}
