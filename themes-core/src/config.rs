//! Configuration management for the themes tool
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (THEMES_*)
//! 3. Config file (~/.config/themes/config.toml)
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::request::{with_branch, with_context, with_org, with_repo, RequestOption};
use crate::{Error, RequestContext, Result, DEFAULT_BRANCH, DEFAULT_ORG, DEFAULT_REPO};

/// Issue tracker target
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Organization owning the enhancements repository
    pub org: String,

    /// Enhancements repository name
    pub repo: String,

    /// Enhancements repository branch
    pub branch: String,

    /// Overall deadline for fetching all themes
    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            timeout: None,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Issue tracker target
    pub github: GitHubConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/themes/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("themes").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - THEMES_ORG, THEMES_REPO, THEMES_BRANCH: tracker target
    /// - THEMES_TIMEOUT: humantime duration such as `30s`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(org) = lookup("THEMES_ORG") {
            self.github.org = org;
        }
        if let Some(repo) = lookup("THEMES_REPO") {
            self.github.repo = repo;
        }
        if let Some(branch) = lookup("THEMES_BRANCH") {
            self.github.branch = branch;
        }
        if let Some(timeout) = lookup("THEMES_TIMEOUT") {
            match humantime::parse_duration(&timeout) {
                Ok(timeout) => self.github.timeout = Some(timeout),
                Err(e) => warn!(value = %timeout, error = %e, "Ignoring invalid THEMES_TIMEOUT"),
            }
        }
        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        org: Option<String>,
        repo: Option<String>,
        branch: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        if let Some(org) = org {
            self.github.org = org;
        }
        if let Some(repo) = repo {
            self.github.repo = repo;
        }
        if let Some(branch) = branch {
            self.github.branch = branch;
        }
        if timeout.is_some() {
            self.github.timeout = timeout;
        }
        self
    }

    /// Load configuration from the default file with env overrides applied
    pub fn load_with_env() -> Result<Self> {
        Ok(Self::load()?.with_env_overrides())
    }

    /// Request options targeting the configured tracker
    ///
    /// The configured timeout, if any, becomes the deadline of `ctx`.
    pub fn request_options(&self, ctx: RequestContext) -> Vec<RequestOption> {
        let ctx = match self.github.timeout {
            Some(timeout) => ctx.deadline_at(tokio::time::Instant::now() + timeout),
            None => ctx,
        };

        vec![
            with_context(ctx),
            with_org(self.github.org.clone()),
            with_repo(self.github.repo.clone()),
            with_branch(self.github.branch.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestConfig;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.org, "kubernetes");
        assert_eq!(config.github.repo, "enhancements");
        assert_eq!(config.github.branch, "master");
        assert!(config.github.timeout.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[github]
org = "example"
repo = "keps"
branch = "main"
timeout = "45s"

[output]
format = "markdown"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.github.org, "example");
        assert_eq!(config.github.repo, "keps");
        assert_eq!(config.github.branch, "main");
        assert_eq!(config.github.timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[github]
repo = "keps"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.github.org, "kubernetes");
        assert_eq!(config.github.repo, "keps");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[github]\norg = \"sig-release\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.github.org, "sig-release");
    }

    #[test]
    fn test_load_from_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[github\norg = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("THEMES_REPO", "keps"), ("THEMES_TIMEOUT", "2m")]
            .into_iter()
            .collect();

        let config =
            Config::default().with_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.github.org, "kubernetes");
        assert_eq!(config.github.repo, "keps");
        assert_eq!(config.github.timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_invalid_env_timeout_ignored() {
        let config = Config::default().with_overrides_from(|key| {
            (key == "THEMES_TIMEOUT").then(|| "soon".to_string())
        });
        assert!(config.github.timeout.is_none());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default()
            .with_overrides_from(|key| (key == "THEMES_ORG").then(|| "from-env".to_string()))
            .with_cli_overrides(Some("from-cli".to_string()), None, None, None);

        assert_eq!(config.github.org, "from-cli");
        assert_eq!(config.github.repo, "enhancements");
    }

    #[tokio::test]
    async fn test_request_options() {
        let mut config = Config::default();
        config.github.org = "example".to_string();
        config.github.timeout = Some(Duration::from_secs(10));

        let request = RequestConfig::from_options(config.request_options(RequestContext::background()));

        assert_eq!(request.org, "example");
        assert_eq!(request.repo, "enhancements");
        assert!(request.ctx.deadline().is_some());
    }
}
