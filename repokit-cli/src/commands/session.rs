//! Options shared by the repository commands and the state they resolve to

use std::path::PathBuf;

use clap::Args;
use repokit_core::{Config, RepoName, Secrets};
use repokit_github::GitHubClient;

/// Repository name plus the options every repository command accepts
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Repository name
    #[arg(value_parser = RepoName::parse)]
    pub repo: RepoName,

    /// Access token (falls back to GITHUB_TOKEN, then the secrets file)
    #[arg(short, long, default_value = "", hide_default_value = true)]
    pub token: String,

    /// Root directory for working copies [default: ./repos]
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}

/// Workspace root and authenticated client for one invocation
pub struct Session {
    pub root: PathBuf,
    pub client: GitHubClient,
}

impl Session {
    /// Load configuration and secrets, then build the GitHub client
    pub fn open(args: &RepoArgs, private: bool) -> anyhow::Result<Self> {
        let config = Config::load_with_overrides(args.root.clone())?;
        let root = config.root()?;

        let token = Secrets::load()?.resolve_token(&args.token);
        if token.is_empty() {
            tracing::warn!("No access token supplied; GitHub will reject the request");
        }

        let client = GitHubClient::new(token, config.github.api_url.as_deref())?
            .with_private(private || config.github.private);

        tracing::debug!(root = %root.display(), repo = %args.repo, "Session ready");

        Ok(Self { root, client })
    }
}
