//! GitHub API client using octocrab

use async_trait::async_trait;
use octocrab::models::Repository;
use octocrab::Octocrab;
use repokit_core::{CloneCredentials, RemoteHost, RemoteRepository, RepoIdentity, RepoName};
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::error::is_not_found;
use crate::{Error, Result};

/// Password GitHub expects alongside a token used as the HTTPS username
pub const OAUTH_BASIC_PASSWORD: &str = "x-oauth-basic";

/// GitHub API client for repository lifecycle operations
pub struct GitHubClient {
    client: Octocrab,
    token: String,
    private: bool,
}

impl GitHubClient {
    /// Create a client authenticating with `token`
    ///
    /// `api_url` overrides the API base for GitHub Enterprise installs. The
    /// token is not checked here; the first request fails if it is bad.
    pub fn new(token: impl Into<String>, api_url: Option<&str>) -> Result<Self> {
        let token = token.into();

        let mut builder = Octocrab::builder().personal_token(token.clone());
        if let Some(api_url) = api_url {
            builder = builder
                .base_uri(api_url)
                .map_err(|e| Error::Parse(format!("Invalid GitHub API URL {}: {}", api_url, e)))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(api_url = api_url.unwrap_or("https://api.github.com"), "Created GitHub client");

        Ok(Self {
            client,
            token,
            private: false,
        })
    }

    /// Create new repositories as private
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Login of the authenticated user
    pub async fn current_login(&self) -> Result<String> {
        debug!("Fetching authenticated user");
        let user = self.client.current().user().await?;
        Ok(user.login)
    }

    /// Fetch a repository, `None` when GitHub answers Not Found
    pub async fn find_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>> {
        debug!(owner, name, "Fetching repository");

        match self.client.repos(owner, name).get().await {
            Ok(repo) => Ok(Some(repo)),
            Err(octocrab::Error::GitHub { source, .. })
                if is_not_found(source.status_code.as_u16()) =>
            {
                debug!(owner, name, "Repository not found");
                Ok(None)
            }
            Err(e) => Err(Error::Api(e)),
        }
    }

    /// Create an auto-initialized repository for the authenticated user
    pub async fn create_user_repository(&self, name: &str) -> Result<Repository> {
        debug!(name, private = self.private, "Creating repository");

        let body = json!({
            "name": name,
            "auto_init": true,
            "private": self.private,
        });

        let repo: Repository = self.client.post("/user/repos", Some(&body)).await?;
        Ok(repo)
    }

    /// Delete a repository
    pub async fn delete_repository_named(&self, owner: &str, name: &str) -> Result<()> {
        debug!(owner, name, "Deleting repository");
        self.client.repos(owner, name).delete().await?;
        Ok(())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("private", &self.private)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RemoteHost for GitHubClient {
    async fn current_user(&self) -> repokit_core::Result<String> {
        Ok(self.current_login().await?)
    }

    async fn get_repository(
        &self,
        identity: &RepoIdentity,
    ) -> repokit_core::Result<Option<RemoteRepository>> {
        match self.find_repository(&identity.owner, &identity.name).await? {
            Some(repo) => Ok(Some(to_remote(repo, &identity.owner)?)),
            None => Ok(None),
        }
    }

    async fn create_repository(&self, name: &RepoName) -> repokit_core::Result<RemoteRepository> {
        let repo = self.create_user_repository(name.as_str()).await?;
        let owner = repo
            .owner
            .as_ref()
            .map(|o| o.login.clone())
            .ok_or_else(|| Error::Parse(format!("Created repository {} has no owner", name)))?;
        Ok(to_remote(repo, &owner)?)
    }

    async fn delete_repository(&self, identity: &RepoIdentity) -> repokit_core::Result<()> {
        Ok(self
            .delete_repository_named(&identity.owner, &identity.name)
            .await?)
    }

    fn clone_credentials(&self) -> CloneCredentials {
        CloneCredentials::new(self.token.clone(), OAUTH_BASIC_PASSWORD)
    }
}

/// Convert an API repository model, preferring the owner GitHub reports
fn to_remote(repo: Repository, fallback_owner: &str) -> Result<RemoteRepository> {
    let owner = repo
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_else(|| fallback_owner.to_string());

    build_remote(
        RepoIdentity::new(owner, repo.name),
        repo.clone_url,
        repo.html_url,
    )
}

fn build_remote(
    identity: RepoIdentity,
    clone_url: Option<Url>,
    html_url: Option<Url>,
) -> Result<RemoteRepository> {
    let clone_url = clone_url
        .ok_or_else(|| Error::Parse(format!("Repository {} has no clone URL", identity)))?;

    // Older Enterprise responses omit html_url; the clone URL minus .git is the same page
    let html_url = match html_url {
        Some(url) => url,
        None => {
            let trimmed = clone_url.as_str().trim_end_matches(".git");
            Url::parse(trimmed).map_err(|e| Error::Parse(e.to_string()))?
        }
    };

    Ok(RemoteRepository {
        identity,
        clone_url,
        html_url,
    })
}
