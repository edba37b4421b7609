//! Clone command - local clone of a remote repository that already exists

use clap::Args;
use repokit_core::{GitCloner, Provisioner};

use super::session::{RepoArgs, Session};

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl CloneArgs {
    /// Execute the clone command
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
                "Cloning existing repository"
            );
        }

        let provisioned = provisioner.provision_existing(&target).await?;

        println!(
            "Cloned {} into {}",
            provisioned.remote.identity,
            provisioned.working_copy.root().display()
        );

        Ok(())
    }
}
