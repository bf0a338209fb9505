//! Command-line interface for wp-populate
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten categories on a local site
//! wp-populate --application-password "abcd efgh ijkl mnop" category --count 10
//!
//! # Three posts with three tags each; tags are backfilled if fewer than 3 exist
//! wp-populate post --count 3 --tags
//!
//! # Posts with every association
//! wp-populate post --all
//!
//! # Reproducible content from a connection profile
//! wp-populate --config staging.toml --seed 42 all
//!
//! # See what would be created without touching the site
//! RUST_LOG=info wp-populate --dry-run post --count 3 --comment
//! ```

use anyhow::Context;
use clap::Parser;
use wp_populate::cli::Cli;
use wp_populate::config::Settings;
use wp_populate::populate::run_populate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings =
        Settings::resolve(&cli.connection).context("Failed to resolve connection settings")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let metrics = run_populate(&cli.command, &settings, &cli.run).await?;

    let prefix = if cli.run.dry_run { "[DRY-RUN] " } else { "" };
    println!("{prefix}Success: created {}", metrics.summary());
    Ok(())
}
