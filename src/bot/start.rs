use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::registry::RegistryService;

/// Builds the Discord client without connecting.
///
/// Separate from `start_bot` so the caller can grab the shard manager for shutdown
/// before the client starts blocking.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token and guild
/// - `registry` - Registry service shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built, e.g. malformed token
pub async fn init_bot(config: &Config, registry: Arc<RegistryService>) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(registry, config.guild_id);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the gateway dispatch loop until the shards shut down.
///
/// # Returns
/// - `Ok(())` - All shards stopped
/// - `Err(AppError)` - Connection or authentication failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
