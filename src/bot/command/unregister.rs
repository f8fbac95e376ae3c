use serenity::all::CreateCommand;

use crate::service::registry::RegistryService;

pub const NAME: &str = "unregister";

/// Builds the `/unregister` command.
pub fn create() -> CreateCommand {
    CreateCommand::new(NAME).description("Unregister your VRChat username")
}

/// Executes `/unregister` for the invoking member.
///
/// No role check is made, so members who lost every allowed role can still
/// remove themselves.
pub async fn run(registry: &RegistryService, requester_id: u64) -> String {
    match registry.unregister(requester_id).await {
        Ok(_) => "✅ You have been unregistered.".to_string(),
        Err(e) => e.user_message(),
    }
}
