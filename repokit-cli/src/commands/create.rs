//! Create command - new remote repository plus local clone

use clap::Args;
use repokit_core::{GitCloner, Provisioner};

use super::session::{RepoArgs, Session};

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Create the remote repository as private
    #[arg(long)]
    pub private: bool,
}

impl CreateArgs {
    /// Execute the create command
    pub async fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        let session = Session::open(&self.repo, self.private)?;
        let cloner = GitCloner::new();
        let provisioner = Provisioner::new(&session.client, &cloner);

        let target = provisioner
            .target(self.repo.repo.clone(), &session.root)
            .await?;

        if verbose {
            tracing::info!(
                repo = %target.identity,
                path = %target.path.display(),
                "Provisioning new repository"
            );
        }

        let provisioned = provisioner.provision_new(&target).await?;

        println!("Created {}", provisioned.remote.html_url);
        println!("Cloned into {}", provisioned.working_copy.root().display());

        Ok(())
    }
}
