//! Themes GitHub - GitHub issue source for major themes
//!
//! This crate implements [`themes_core::IssueSource`] on top of octocrab.

mod client;
mod error;
mod issues;

pub use client::{parse_repo_slug, GitHubClient};
pub use error::{Error, Result};
