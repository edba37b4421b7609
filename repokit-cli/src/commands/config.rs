//! Config command - print the effective configuration

use repokit_core::{Config, Secrets};

/// Print configuration after file and environment overrides
pub fn show_config() -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides();
    let token = Secrets::load()?.resolve_token("");

    println!("Repokit Configuration");
    println!("=====================");
    println!();
    println!("Workspace:");
    println!("  root: {}", config.root()?.display());
    println!();
    println!("GitHub:");
    println!(
        "  api_url: {}",
        config.github.api_url.as_deref().unwrap_or("(default)")
    );
    println!("  private: {}", config.github.private);
    println!(
        "  token: {}",
        if token.is_empty() { "(not set)" } else { "(set)" }
    );
    println!();

    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }

    Ok(())
}
