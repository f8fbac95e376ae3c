use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::service::registry::RegistryService;

pub const NAME: &str = "register";
pub const USERNAME_OPTION: &str = "username";

/// Builds the `/register` command with its required `username` option.
pub fn create() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Register your VRChat username")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                USERNAME_OPTION,
                "Your VRChat username",
            )
            .required(true),
        )
}

/// Executes `/register` for the invoking member.
///
/// A missing option is treated as an empty username; Discord enforces the option
/// as required, and usernames are stored without validation either way.
///
/// # Arguments
/// - `registry` - Registry service
/// - `requester_id` - Discord user ID of the invoking member
/// - `requester_roles` - Role IDs of the invoking member
/// - `username` - Value of the `username` option
///
/// # Returns
/// - `String` - Reply shown to the member
pub async fn run(
    registry: &RegistryService,
    requester_id: u64,
    requester_roles: &[u64],
    username: Option<&str>,
) -> String {
    let username = username.unwrap_or_default();

    match registry
        .register(requester_id, requester_roles, username)
        .await
    {
        Ok(record) => format!(
            "✅ VRChat username `{}` registered successfully!",
            record.vrchat_username
        ),
        Err(e) => e.user_message(),
    }
}
