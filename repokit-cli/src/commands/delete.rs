//! Delete command - remove the remote repository and the local clone

use clap::Args;
use repokit_core::{GitCloner, Provisioner};

use super::session::{RepoArgs, Session};

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let session = Session::open(&self.repo, false)?;
        let cloner = GitCloner::new();
        let provisioner = Provisioner::new(&session.client, &cloner);

        let target = provisioner
            .target(self.repo.repo.clone(), &session.root)
            .await?;

        if verbose {
            tracing::info!(
                repo = %target.identity,
                path = %target.path.display(),
                "Removing repository"
            );
        }

        let removed = provisioner.remove(&target).await?;

        if removed.remote_deleted {
            println!("Deleted remote {}", target.identity);
        }
        if removed.local_deleted {
            println!("Deleted {}", target.path.display());
        }
        if removed.is_noop() {
            println!("Nothing to delete for {}", target.identity);
        }

        Ok(())
    }
}
