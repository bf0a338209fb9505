//! Populate command runner.

use anyhow::Context;
use content_store::MemoryStore;
use populate_generator::FakeGenerator;
use populate_seeder::{PopulateMetrics, ProgressMode, Seeder};
use std::sync::Arc;
use std::time::Instant;
use wp_rest_client::WpRestClient;

use super::{execute, mask_credentials, PopulateCommand};
use crate::config::Settings;
use crate::RunOpts;

/// Run a populate subcommand and return what it created.
///
/// With `--dry-run` the content goes to an in-memory store and no request
/// reaches the site.
pub async fn run_populate(
    command: &PopulateCommand,
    settings: &Settings,
    run: &RunOpts,
) -> anyhow::Result<PopulateMetrics> {
    let generator = match run.seed {
        Some(seed) => FakeGenerator::new(seed),
        None => FakeGenerator::from_entropy(),
    };
    let seed = generator.seed();
    let progress = if run.quiet {
        ProgressMode::Hidden
    } else {
        ProgressMode::Bar
    };

    let seeder = if run.dry_run {
        tracing::info!(
            "[DRY-RUN] Would run '{}' against {} (seed={})",
            command.name(),
            mask_credentials(&settings.endpoint),
            seed
        );
        tracing::info!("[DRY-RUN] Writing to an in-memory store");
        let store = Arc::new(MemoryStore::new());
        Seeder::new(store.clone(), store, generator)
    } else {
        let config = settings.client_config()?;
        let client = Arc::new(
            WpRestClient::new(&config).context("Failed to build WordPress REST client")?,
        );
        tracing::info!(
            "Running '{}' against {} as {} (seed={})",
            command.name(),
            mask_credentials(client.api_base()),
            settings.username,
            seed
        );
        Seeder::new(client.clone(), client, generator)
    };

    let mut seeder = seeder
        .with_progress(progress)
        .with_image_url_template(settings.image_url.clone());

    let start = Instant::now();
    let outcome = execute(&mut seeder, command).await;
    let mut metrics = seeder.into_metrics();
    metrics.total_duration = start.elapsed();

    if let Err(e) = outcome {
        if metrics.entities_created() > 0 {
            tracing::warn!("Created before failure: {}", metrics.summary());
        }
        tracing::info!("Rerun with --seed {} to reproduce this content", seed);
        return Err(e).with_context(|| format!("Failed to populate '{}'", command.name()));
    }

    tracing::info!(
        "Populate '{}' finished in {:?}",
        command.name(),
        metrics.total_duration
    );
    Ok(metrics)
}
