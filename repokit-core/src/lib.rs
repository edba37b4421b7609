//! Repokit Core - provisioning of paired remote and local repositories
//!
//! This crate holds the reconciliation logic that decides whether to create,
//! clone or delete, plus the git plumbing and configuration it relies on.
//! Hosting services plug in through [`RemoteHost`].

pub mod config;
pub mod error;
pub mod git;
pub mod identity;
pub mod path;
pub mod provision;
pub mod remote;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{Cloner, GitCloner, WorkingCopy};
pub use identity::{RepoIdentity, RepoName};
pub use provision::{Provisioned, Provisioner, Removed, Target};
pub use remote::{CloneCredentials, RemoteHost, RemoteRepository};
pub use secrets::Secrets;
