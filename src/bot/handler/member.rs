use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member};

use crate::model::record::ReconcileOutcome;
use crate::service::registry::RegistryService;

/// Handles the guild_member_update event when a member's roles or profile change.
///
/// The event carries the member's full current role list, so the stored roles are
/// reconciled against it directly. Errors are logged and swallowed.
pub async fn handle_guild_member_update(
    registry: &RegistryService,
    guild_id: GuildId,
    _ctx: Context,
    _old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if event.guild_id != guild_id {
        return;
    }

    let member_id = event.user.id.get();
    let roles: Vec<u64> = event.roles.iter().map(|role| role.get()).collect();

    match registry.reconcile_roles(member_id, &roles).await {
        Ok(ReconcileOutcome::NotRegistered) | Ok(ReconcileOutcome::Unchanged) => {}
        Ok(ReconcileOutcome::Updated(record)) => {
            tracing::debug!(
                "Member update for {} ({}) synced roles",
                event.user.name,
                record.vrchat_username
            )
        }
        Ok(ReconcileOutcome::Removed(record)) => {
            tracing::debug!(
                "Member update for {} ({}) removed record",
                event.user.name,
                record.vrchat_username
            )
        }
        Err(e) => tracing::error!("Failed to reconcile roles for member {}: {}", member_id, e),
    }
}
