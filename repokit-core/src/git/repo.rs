//! Local working copy handle

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// A cloned repository on disk
pub struct WorkingCopy {
    /// The underlying git2 repository
    repo: Repository,
    /// Path to the working tree root
    root: PathBuf,
}

impl std::fmt::Debug for WorkingCopy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkingCopy")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl WorkingCopy {
    /// Wrap a freshly cloned repository
    pub(crate) fn from_repository(repo: Repository) -> Result<Self> {
        let root = repo
            .workdir()
            .ok_or_else(|| Error::Config("Bare repositories are not supported".to_string()))?
            .to_path_buf();

        Ok(Self { repo, root })
    }

    /// Get the working tree root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if `path` is itself the root of a git working copy
    pub fn is_working_copy(path: impl AsRef<Path>) -> bool {
        Repository::open(path.as_ref()).is_ok()
    }

    /// URL of the `origin` remote, if configured
    pub fn origin_url(&self) -> Option<String> {
        self.repo
            .find_remote("origin")
            .ok()
            .and_then(|remote| remote.url().map(|u| u.to_string()))
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(Error::Clone(format!("Failed to get HEAD: {}", e))),
        };

        if head.is_branch() {
            Ok(head.shorthand().map(|s| s.to_string()))
        } else {
            // Detached HEAD
            Ok(None)
        }
    }
}
