mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing()?;

    let config = Config::from_env()?;
    let (registry, history) = startup::setup_registry(&config);

    let client = bot::start::init_bot(&config, registry).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received, stopping bot");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    bot::start::start_bot(client).await?;

    if let Some(report) = history.last().await {
        tracing::info!(
            "Last whitelist upload at {}: {:?}",
            report.at.to_rfc3339(),
            report.outcome
        );
    }

    let failures = history.failures().await;
    if failures.is_empty() {
        tracing::info!("Bot stopped");
    } else {
        tracing::warn!(
            "Bot stopped with {} failed whitelist uploads, last: {:?}",
            failures.len(),
            failures.last().map(|report| &report.outcome)
        );
    }

    Ok(())
}
