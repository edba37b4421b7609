//! Hosting service abstraction
//!
//! The orchestrator only talks to a hosting service through [`RemoteHost`],
//! so the provider-specific pieces (API client, clone credential convention)
//! live in the integration crates.

use async_trait::async_trait;
use url::Url;

use crate::{RepoIdentity, RepoName, Result};

/// A repository as reported by the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    /// Owner and name
    pub identity: RepoIdentity,
    /// URL git clones from
    pub clone_url: Url,
    /// Browser URL, printed to confirm creation
    pub html_url: Url,
}

/// Username/password pair handed to the git transport
#[derive(Clone, PartialEq, Eq)]
pub struct CloneCredentials {
    pub username: String,
    pub password: String,
}

impl CloneCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CloneCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneCredentials")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Operations the provisioning flows need from a hosting service
///
/// Every call goes to the service; nothing is cached between calls.
#[async_trait]
pub trait RemoteHost: Send + Sync {
    /// Login of the authenticated user
    async fn current_user(&self) -> Result<String>;

    /// Look up a repository, `None` when the service reports it missing
    async fn get_repository(&self, identity: &RepoIdentity) -> Result<Option<RemoteRepository>>;

    /// Create an auto-initialized repository owned by the authenticated user
    async fn create_repository(&self, name: &RepoName) -> Result<RemoteRepository>;

    /// Delete a repository
    async fn delete_repository(&self, identity: &RepoIdentity) -> Result<()>;

    /// Credentials the clone executor should present for this host
    fn clone_credentials(&self) -> CloneCredentials;
}
