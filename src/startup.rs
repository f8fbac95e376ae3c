use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::git::GitClient,
    error::AppError,
    service::{
        publish::{
            history::{PublishHistory, DEFAULT_HISTORY_CAPACITY},
            remote::RemoteTarget,
            PublishService,
        },
        registry::RegistryService,
    },
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}

/// Builds the git-backed publisher from configuration.
///
/// Without a token, or with a token but no repository owner, the publisher is
/// still created and skips every attempt with a warning.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `PublishService` - Publisher for the configured mirror
pub fn setup_publisher(config: &Config) -> PublishService {
    let remote = config.remote.as_ref().and_then(RemoteTarget::from_config);

    match &remote {
        Some(target) => tracing::info!("Publishing whitelist to {}", target),
        None => tracing::warn!("Git remote not configured, whitelist will only be saved locally"),
    }

    let git = GitClient::new(&config.repo_path, config.publish_timeout);

    PublishService::new(git, remote, PublishHistory::new(DEFAULT_HISTORY_CAPACITY))
}

/// Builds the registry service and the publish history it reports into.
///
/// # Returns
/// - `(Arc<RegistryService>, PublishHistory)` - Service for the bot, history for shutdown reporting
pub fn setup_registry(config: &Config) -> (Arc<RegistryService>, PublishHistory) {
    let publisher = setup_publisher(config);
    let history = publisher.history().clone();

    tracing::info!(
        "Using whitelist file {} with {} allowed roles",
        config.whitelist_path().display(),
        config.allowed_roles.len()
    );

    let registry = RegistryService::new(
        config.whitelist_path(),
        config.allowed_roles.clone(),
        Arc::new(publisher),
    );

    (Arc::new(registry), history)
}
