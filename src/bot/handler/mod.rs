use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, GuildId, GuildMemberUpdateEvent, Interaction, Member, Ready,
};
use serenity::async_trait;

use crate::service::registry::RegistryService;

pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub registry: Arc<RegistryService>,
    pub guild_id: GuildId,
}

impl Handler {
    pub fn new(registry: Arc<RegistryService>, guild_id: u64) -> Self {
        Self {
            registry,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.guild_id, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.registry, self.guild_id, ctx, interaction)
            .await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.registry, self.guild_id, ctx, old, new, event)
            .await;
    }
}
