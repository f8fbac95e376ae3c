//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs the connection and registers the slash commands in the configured guild.
//! Guild commands are replaced wholesale, so stale commands from earlier versions
//! disappear on reconnect.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Failing to register commands is logged and does not stop the bot; member
/// updates are still reconciled.
///
/// # Arguments
/// - `guild_id` - Guild the commands are registered in
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(guild_id: GuildId, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match guild_id.set_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!(
            "Registered {} commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e),
    }
}
