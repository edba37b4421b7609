//! Secrets management for repokit
//!
//! The access token can come from the command line, the environment or a
//! secrets file at `~/.config/repokit/secrets.toml`, which must have
//! restrictive permissions (0600 on Unix).
//!
//! Loading priority:
//! 1. `--token` flag
//! 2. Environment variable (GITHUB_TOKEN)
//! 3. Secrets file (~/.config/repokit/secrets.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Secrets structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// GitHub configuration
    pub github: GitHubSecrets,
}

/// GitHub-related secrets
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubSecrets {
    /// GitHub Personal Access Token
    pub token: Option<String>,
}

impl std::fmt::Debug for GitHubSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSecrets")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Secrets {
    /// Load secrets from the default location
    ///
    /// Returns default (empty) secrets if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_secrets_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load secrets from a specific file with permission checking
    pub fn load_from_file(path: &Path) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(path)?.permissions().mode();

            // Readable by group or others
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }

            debug!(path = %path.display(), mode = format!("{:o}", mode & 0o777), "Secrets file permissions OK");
        }

        let contents = std::fs::read_to_string(path)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        if let Some(ref mut token) = secrets.github.token {
            *token = token.trim().to_string();
        }

        Ok(secrets)
    }

    /// Get the default secrets file path
    ///
    /// Returns `~/.config/repokit/secrets.toml` on Unix
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repokit").join("secrets.toml"))
    }

    /// Pick the token to authenticate with
    ///
    /// Returns an empty string when no source has one; the token is not
    /// validated locally and the hosting service rejects it instead.
    pub fn resolve_token(&self, cli_token: &str) -> String {
        self.resolve_token_with(cli_token, std::env::var("GITHUB_TOKEN").ok())
    }

    fn resolve_token_with(&self, cli_token: &str, env_token: Option<String>) -> String {
        let cli_token = cli_token.trim();
        if !cli_token.is_empty() {
            debug!("Using token from command line");
            return cli_token.to_string();
        }

        if let Some(token) = env_token.map(|t| t.trim().to_string()) {
            if !token.is_empty() {
                debug!("Using token from GITHUB_TOKEN environment variable");
                return token;
            }
        }

        if let Some(ref token) = self.github.token {
            if !token.is_empty() {
                debug!("Using token from secrets file");
                return token.clone();
            }
        }

        String::new()
    }
}
