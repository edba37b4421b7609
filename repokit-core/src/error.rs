//! Error types for repokit

use std::path::PathBuf;

use thiserror::Error;

use crate::RepoIdentity;

/// Result type alias for repokit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for repokit operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Target directory for the working copy already exists
    #[error("Local path already exists: {}", .0.display())]
    LocalPathConflict(PathBuf),

    /// Remote repository exists when it was expected to be absent
    #[error("Remote repository {0} already exists")]
    RemoteAlreadyExists(RepoIdentity),

    /// Remote repository is absent when it was expected to exist
    #[error("Remote repository {0} not found")]
    RemoteNotFound(RepoIdentity),

    /// Repository name rejected before use
    #[error("Invalid repository name: {0}")]
    InvalidName(String),

    /// Authentication rejected by the hosting service or git transport
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Network failure talking to the hosting service or git transport
    #[error("Network error: {0}")]
    Network(String),

    /// Any other hosting service failure
    #[error("Remote error: {0}")]
    Remote(String),

    /// Clone failed for a reason other than auth or network
    #[error("Clone error: {0}")]
    Clone(String),

    /// Removal stopped after part of it already took effect
    #[error("Removal of {identity} incomplete (remote deleted: {remote_deleted}): {source}")]
    PartialRemoval {
        identity: RepoIdentity,
        remote_deleted: bool,
        #[source]
        source: Box<Error>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
