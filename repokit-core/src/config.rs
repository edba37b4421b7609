//! Configuration management for repokit
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REPOKIT_*)
//! 3. Config file (~/.config/repokit/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where working copies live
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Root directory for working copies; `<cwd>/repos` when unset
    pub root: Option<PathBuf>,
}

/// GitHub-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API base URL, for GitHub Enterprise
    pub api_url: Option<String>,

    /// Create new repositories as private
    pub private: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub workspace: WorkspaceConfig,
    pub github: GitHubConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/repokit/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repokit").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REPOKIT_ROOT: Root directory for working copies
    /// - REPOKIT_GITHUB_API: GitHub API base URL
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(root) = lookup("REPOKIT_ROOT").filter(|v| !v.is_empty()) {
            self.workspace.root = Some(PathBuf::from(root));
        }

        if let Some(api_url) = lookup("REPOKIT_GITHUB_API").filter(|v| !v.is_empty()) {
            self.github.api_url = Some(api_url);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, root: Option<PathBuf>) -> Self {
        if let Some(root) = root {
            self.workspace.root = Some(root);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(root: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?.with_env_overrides().with_cli_overrides(root))
    }

    /// Effective workspace root, made absolute against the current directory
    pub fn root(&self) -> Result<PathBuf> {
        match &self.workspace.root {
            Some(root) if root.is_absolute() => Ok(root.clone()),
            Some(root) => Ok(std::env::current_dir()?.join(root)),
            None => crate::path::default_root(),
        }
    }
}
