//! Repokit CLI - provision or tear down a remote repository and its local clone

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CloneArgs, CreateArgs, DeleteArgs};

/// Repokit: paired remote and local repositories
#[derive(Parser, Debug)]
#[command(name = "repokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a remote repository and clone it under the root
    Create(CreateArgs),

    /// Delete a remote repository and its local clone
    Delete(DeleteArgs),

    /// Clone an existing remote repository under the root
    Clone(CloneArgs),

    /// Show current configuration
    Config,
}

/// Log level used when `RUST_LOG` is unset
fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warnings always show and --verbose adds info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(cli.verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Create(args) => args.execute(cli.verbose).await?,
        Commands::Delete(args) => args.execute(cli.verbose).await?,
        Commands::Clone(args) => args.execute(cli.verbose).await?,
        Commands::Config => commands::show_config()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_log_directive() {
        assert_eq!(default_log_directive(false), "warn");
        assert_eq!(default_log_directive(true), "info");
    }

    #[test]
    fn test_parse_create_defaults() {
        let cli = Cli::try_parse_from(["repokit", "create", "demo"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.repo.repo.as_str(), "demo");
                assert_eq!(args.repo.token, "");
                assert!(args.repo.root.is_none());
                assert!(!args.private);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_with_options() {
        let cli = Cli::try_parse_from([
            "repokit", "delete", "demo", "-t", "ghp_abc", "-r", "/tmp/work",
        ])
        .unwrap();
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.repo.token, "ghp_abc");
                assert_eq!(args.repo.root, Some(PathBuf::from("/tmp/work")));
            }
            other => panic!("expected delete, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_long_options() {
        let cli = Cli::try_parse_from([
            "repokit",
            "create",
            "--token",
            "ghp_abc",
            "--root",
            "work",
            "--private",
            "demo",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.repo.token, "ghp_abc");
                assert_eq!(args.repo.root, Some(PathBuf::from("work")));
                assert!(args.private);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_traversal_name() {
        assert!(Cli::try_parse_from(["repokit", "create", "../escape"]).is_err());
        assert!(Cli::try_parse_from(["repokit", "delete", ".."]).is_err());
    }

    #[test]
    fn test_parse_requires_repo() {
        assert!(Cli::try_parse_from(["repokit", "create"]).is_err());
        assert!(Cli::try_parse_from(["repokit"]).is_err());
    }

    #[test]
    fn test_private_only_on_create() {
        assert!(Cli::try_parse_from(["repokit", "delete", "demo", "--private"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["repokit", "clone", "demo", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Clone(_)));
    }
}
