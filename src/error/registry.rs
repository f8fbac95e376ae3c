use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by registry operations.
///
/// Validation variants are terminal for the invocation and never mutate the
/// stored registry. `PersistenceFailed` aborts the operation before anything
/// is published.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The requester holds none of the allow-listed roles.
    #[error("Requester does not hold any allowed role")]
    PermissionDenied,

    /// The requester already has a record.
    ///
    /// # Fields
    /// - `username` - The username currently stored for the requester
    #[error("Already registered as '{username}'")]
    AlreadyRegistered { username: String },

    /// The requester has no record to remove.
    #[error("Not registered")]
    NotRegistered,

    /// Reading or writing the registry file failed.
    #[error(transparent)]
    PersistenceFailed(#[from] PersistenceError),
}

impl RegistryError {
    /// Converts the error into the reply shown to the requester.
    ///
    /// Persistence failures are logged with full details and replaced by a
    /// generic message so file paths and OS errors are not leaked into chat.
    ///
    /// # Returns
    /// - `String` - Human readable reply for an ephemeral interaction response
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied => "❌ You do not have permission to register.".to_string(),
            Self::AlreadyRegistered { username } => format!(
                "❌ Already registered as `{}`! Use `/unregister` first.",
                username
            ),
            Self::NotRegistered => "❌ You are not registered yet!".to_string(),
            Self::PersistenceFailed(err) => {
                tracing::error!("Registry persistence failed: {}", err);
                "❌ Something went wrong saving the whitelist, please try again later.".to_string()
            }
        }
    }
}

/// I/O and serialization failures of the registry file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The registry file exists but could not be read.
    #[error("Failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or replacing the registry file failed.
    #[error("Failed to write registry file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory registry could not be serialized.
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),
}
