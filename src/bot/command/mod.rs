//! Slash command definitions and their execution.
//!
//! Each command module exposes its `NAME`, a `create()` builder used when registering
//! the command with Discord, and a `run()` function that executes it against the
//! registry and returns the reply text. `run()` never fails; errors are turned into
//! replies with `RegistryError::user_message`.

pub mod register;
pub mod unregister;

use serenity::all::{CommandInteraction, CreateCommand};

/// All commands registered in the configured guild.
pub fn all() -> Vec<CreateCommand> {
    vec![register::create(), unregister::create()]
}

/// Looks up a string option of an invoked command by name.
///
/// # Returns
/// - `Some(&str)` - The option was supplied as a string
/// - `None` - The option is absent or has another type
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

#[cfg(test)]
mod test;
