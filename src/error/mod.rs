//! Error types for the whitelist bot.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level type returned from startup and the bot's run loop. Domain errors
//! live in their own submodules: `RegistryError` for registry operations (with
//! conversion into user-facing replies), `GitError` for the publish step, and
//! `ConfigError` for environment loading.

pub mod config;
pub mod git;
pub mod registry;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the errors that can abort startup or the bot's dispatch loop.
/// Errors raised while handling a single event are logged by the handler and
/// never escalate to this type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
