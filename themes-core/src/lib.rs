//! Themes Core - Core library for major themes release notes
//!
//! This crate turns a list of enhancement issue numbers into ordered
//! [`ThemeRecord`]s by fetching each issue through an [`IssueSource`] and
//! scraping the labeled fields out of its body.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod report;
pub mod request;
pub mod secrets;
pub mod source;
pub mod theme;

pub use config::{Config, GitHubConfig, OutputConfig, OutputFormat};
pub use context::{ContextError, RequestContext};
pub use error::{BoxError, Error, Result};
pub use extractor::{list_major_themes, list_themes};
pub use report::ThemeReport;
pub use request::{
    with_branch, with_context, with_org, with_repo, RequestConfig, RequestOption, DEFAULT_BRANCH,
    DEFAULT_ORG, DEFAULT_REPO,
};
pub use secrets::Secrets;
pub use source::{IssueSource, SourceIssue};
pub use theme::ThemeRecord;
