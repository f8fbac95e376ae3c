//! Service layer for business logic and orchestration.
//!
//! This module sits between the bot handlers and the data layer:
//!
//! - **Registry**: Registration rules, role reconciliation and the lock that
//!   serializes every load/mutate/save/publish transaction
//! - **Publish**: Best-effort backup of the registry file to a remote git repository

pub mod publish;
pub mod registry;
