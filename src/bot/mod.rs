//! Discord bot integration for whitelist registration.
//!
//! This module exposes the `register` and `unregister` slash commands to members of
//! the configured guild and watches member updates so the stored roles follow the
//! member's current roles. All whitelist changes go through the `RegistryService`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and interaction events
//! - `GUILD_MEMBERS` - Receive events about guild member changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
