//! GitHub token lookup
//!
//! The token is read from the `GITHUB_TOKEN` environment variable, falling
//! back to `~/.config/themes/secrets.toml`:
//!
//! ```toml
//! [github]
//! token = "ghp_..."
//! ```
//!
//! On Unix the secrets file must not be readable by group or others. A
//! missing token is fine; public enhancement issues can be read anonymously.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SecretsFile {
    github: GitHubSecrets,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GitHubSecrets {
    token: Option<String>,
}

/// Credentials available to the GitHub client
#[derive(Clone, Default)]
pub struct Secrets {
    file_token: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("file_token", &self.file_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Secrets {
    /// Load secrets from the default location, empty if the file is absent
    pub fn load() -> Result<Self> {
        match Self::default_secrets_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load secrets from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        check_permissions(path)?;

        let contents = std::fs::read_to_string(path)?;
        let file: SecretsFile = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        Ok(Self {
            file_token: file.github.token.and_then(non_empty),
        })
    }

    /// Get the default secrets file path
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("themes").join("secrets.toml"))
    }

    /// GitHub token, `GITHUB_TOKEN` taking priority over the secrets file
    pub fn github_token(&self) -> Option<String> {
        self.token_from(std::env::var("GITHUB_TOKEN").ok())
    }

    fn token_from(&self, env_token: Option<String>) -> Option<String> {
        if let Some(token) = env_token.and_then(non_empty) {
            debug!("Using GitHub token from GITHUB_TOKEN");
            return Some(token);
        }

        self.file_token.clone().inspect(|_| {
            debug!("Using GitHub token from secrets file");
        })
    }
}

fn non_empty(token: String) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(Error::Config(format!(
            "Secrets file {} has insecure permissions {:o}. Please run: chmod 600 {}",
            path.display(),
            mode & 0o777,
            path.display()
        )));
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secrets_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o600))
                .unwrap();
        }
        file
    }

    #[test]
    fn test_default_has_no_token() {
        assert_eq!(Secrets::default().token_from(None), None);
    }

    #[test]
    fn test_file_token_trimmed() {
        let file = secrets_file("[github]\ntoken = \"  ghp_test  \"\n");
        let secrets = Secrets::load_from_file(file.path()).unwrap();
        assert_eq!(secrets.token_from(None), Some("ghp_test".to_string()));
    }

    #[test]
    fn test_empty_file_token_ignored() {
        let file = secrets_file("[github]\ntoken = \"\"\n");
        let secrets = Secrets::load_from_file(file.path()).unwrap();
        assert_eq!(secrets.token_from(None), None);
    }

    #[test]
    fn test_env_token_wins() {
        let file = secrets_file("[github]\ntoken = \"from_file\"\n");
        let secrets = Secrets::load_from_file(file.path()).unwrap();

        assert_eq!(
            secrets.token_from(Some("from_env".to_string())),
            Some("from_env".to_string())
        );
        assert_eq!(
            secrets.token_from(Some("   ".to_string())),
            Some("from_file".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let file = secrets_file("[github]\ntoken = \"ghp_secret\"\n");
        let secrets = Secrets::load_from_file(file.path()).unwrap();
        assert!(!format!("{:?}", secrets).contains("ghp_secret"));
    }

    #[cfg(unix)]
    #[test]
    fn test_insecure_permissions_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let file = secrets_file("[github]\ntoken = \"test\"\n");
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let err = Secrets::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("insecure permissions"));
    }
}
