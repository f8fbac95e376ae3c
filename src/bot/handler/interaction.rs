//! Slash command dispatch.

use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, GuildId, Interaction,
};

use crate::bot::command::{self, register, unregister};
use crate::service::registry::RegistryService;

/// Handles the interaction_create event for slash commands.
///
/// The response is deferred as ephemeral before the registry is touched, since a
/// save followed by a push can outlast Discord's initial response window. The reply
/// text then replaces the deferred response. Other interaction kinds and commands
/// from other guilds are ignored.
///
/// # Arguments
/// - `registry` - Registry service executing the command
/// - `guild_id` - Configured guild
/// - `ctx` - Discord context providing the HTTP client
/// - `interaction` - Incoming interaction
pub async fn handle_interaction_create(
    registry: &RegistryService,
    guild_id: GuildId,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.guild_id.is_some_and(|id| id != guild_id) {
        tracing::debug!(
            "Ignoring command /{} from foreign guild {:?}",
            command.data.name,
            command.guild_id
        );
        return;
    }

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{} response: {:?}", command.data.name, e);
        return;
    }

    let reply = match command.data.name.as_str() {
        register::NAME => {
            let roles = member_roles(&command);
            let username = command::string_option(&command, register::USERNAME_OPTION);
            register::run(registry, command.user.id.get(), &roles, username).await
        }
        unregister::NAME => unregister::run(registry, command.user.id.get()).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    let response = EditInteractionResponse::new().content(reply);
    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to send /{} response: {:?}", command.data.name, e);
    }
}

/// Role IDs of the invoking member, empty when invoked outside a guild.
fn member_roles(command: &CommandInteraction) -> Vec<u64> {
    command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default()
}
