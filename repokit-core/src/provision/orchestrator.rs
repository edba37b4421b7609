//! Provisioning flows: create+clone, clone, remove
//!
//! Every flow probes first, asks the guard for its intent what to do, then
//! acts. Steps run strictly in sequence and a failure aborts the flow without
//! undoing steps that already took effect.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::plan::{
    reconcile_clone, reconcile_create, reconcile_remove, Conflict, Intent, Probe, RemoteState,
};
use crate::git::{Cloner, WorkingCopy};
use crate::path::resolve;
use crate::{Error, RemoteHost, RemoteRepository, RepoIdentity, RepoName, Result};

/// Everything a flow needs to know about the repository it acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Owner/name on the hosting service
    pub identity: RepoIdentity,
    /// Validated repository name
    pub name: RepoName,
    /// Resolved working copy path
    pub path: PathBuf,
}

impl Target {
    /// Build a target owned by `owner`, with its working copy under `root`
    pub fn new(owner: impl Into<String>, name: RepoName, root: &Path) -> Self {
        Self {
            identity: RepoIdentity::new(owner, name.as_str()),
            path: resolve(root, &name),
            name,
        }
    }
}

/// Result of a create or clone flow
#[derive(Debug)]
pub struct Provisioned {
    /// The new working copy
    pub working_copy: WorkingCopy,
    /// The remote it was cloned from
    pub remote: RemoteRepository,
    /// Whether this flow created the remote
    pub created_remote: bool,
}

/// Result of a remove flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed {
    pub remote_deleted: bool,
    pub local_deleted: bool,
}

impl Removed {
    /// Nothing existed on either side
    pub fn is_noop(&self) -> bool {
        !self.remote_deleted && !self.local_deleted
    }
}

/// Drives the provisioning flows against a hosting service and clone executor
pub struct Provisioner<'a> {
    host: &'a dyn RemoteHost,
    cloner: &'a dyn Cloner,
    remove_local: fn(&Path) -> std::io::Result<()>,
}

impl std::fmt::Debug for Provisioner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provisioner").finish_non_exhaustive()
    }
}

impl<'a> Provisioner<'a> {
    pub fn new(host: &'a dyn RemoteHost, cloner: &'a dyn Cloner) -> Self {
        Self {
            host,
            cloner,
            remove_local,
        }
    }

    /// Resolve the target for `name` under `root`, owned by the authenticated user
    pub async fn target(&self, name: RepoName, root: &Path) -> Result<Target> {
        let owner = self.host.current_user().await?;
        debug!(owner = %owner, name = %name, "Resolved repository owner");
        Ok(Target::new(owner, name, root))
    }

    /// Snapshot local and remote existence for `intent`
    ///
    /// For create and clone, the remote is left unprobed when the local path
    /// already exists.
    pub async fn probe(&self, intent: Intent, target: &Target) -> Result<Probe> {
        let local_exists = local_exists(&target.path);

        let remote = if intent.guards_local_first() && local_exists {
            RemoteState::Unprobed
        } else {
            self.host.get_repository(&target.identity).await?.into()
        };

        debug!(
            ?intent,
            path = %target.path.display(),
            local_exists,
            remote_exists = remote.is_present(),
            "Probed repository state"
        );

        Ok(Probe {
            local_exists,
            remote,
        })
    }

    /// Create the remote repository, then clone it
    pub async fn provision_new(&self, target: &Target) -> Result<Provisioned> {
        let probe = self.probe(Intent::Create, target).await?;

        reconcile_create(&probe).map_err(|conflict| conflict_error(conflict, target))?;

        let created = self.host.create_repository(&target.name).await?;
        info!(
            repo = %created.identity,
            url = %created.html_url,
            "Created remote repository"
        );

        let mut provisioned = self.provision_existing(target).await?;
        provisioned.created_remote = true;
        Ok(provisioned)
    }

    /// Clone a remote repository that already exists
    pub async fn provision_existing(&self, target: &Target) -> Result<Provisioned> {
        let probe = self.probe(Intent::Clone, target).await?;

        let remote =
            reconcile_clone(&probe).map_err(|conflict| conflict_error(conflict, target))?;

        if let Some(parent) = target.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let credentials = self.host.clone_credentials();
        let working_copy = self
            .cloner
            .clone_repo(&remote.clone_url, &target.path, &credentials)?;

        info!(
            repo = %remote.identity,
            path = %working_copy.root().display(),
            "Cloned repository"
        );

        Ok(Provisioned {
            working_copy,
            remote,
            created_remote: false,
        })
    }

    /// Delete the remote repository and the local working copy
    ///
    /// Missing sides are skipped, so running this twice is safe. The local
    /// path is stat'ed again after the remote step, right before deleting it.
    /// If the local deletion fails after the remote was deleted, the error
    /// says so.
    pub async fn remove(&self, target: &Target) -> Result<Removed> {
        let probe = self.probe(Intent::Remove, target).await?;
        let plan = reconcile_remove(&probe);

        let mut removed = Removed {
            remote_deleted: false,
            local_deleted: false,
        };

        if plan.remote {
            self.host.delete_repository(&target.identity).await?;
            info!(repo = %target.identity, "Deleted remote repository");
            removed.remote_deleted = true;
        } else {
            debug!(repo = %target.identity, "Remote repository absent, nothing to delete");
        }

        let local = local_exists(&target.path);
        if local != plan.local {
            debug!(
                path = %target.path.display(),
                local_exists = local,
                "Local path changed while deleting remote"
            );
        }

        if local {
            if let Err(e) = (self.remove_local)(&target.path) {
                warn!(
                    path = %target.path.display(),
                    remote_deleted = removed.remote_deleted,
                    error = %e,
                    "Failed to delete local working copy"
                );
                return Err(if removed.remote_deleted {
                    Error::PartialRemoval {
                        identity: target.identity.clone(),
                        remote_deleted: true,
                        source: Box::new(Error::Io(e)),
                    }
                } else {
                    Error::Io(e)
                });
            }
            info!(path = %target.path.display(), "Deleted local working copy");
            removed.local_deleted = true;
        } else {
            debug!(path = %target.path.display(), "Local path absent, nothing to delete");
        }

        Ok(removed)
    }
}

fn conflict_error(conflict: Conflict, target: &Target) -> Error {
    match conflict {
        Conflict::LocalPathExists => Error::LocalPathConflict(target.path.clone()),
        Conflict::RemoteExists => Error::RemoteAlreadyExists(target.identity.clone()),
        Conflict::RemoteMissing => Error::RemoteNotFound(target.identity.clone()),
    }
}

/// Stat without following symlinks, so a dangling link still counts
fn local_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

fn remove_local(path: &Path) -> std::io::Result<()> {
    let metadata = std::fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}
