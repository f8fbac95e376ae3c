//! Registry file repository.
//!
//! This module provides the `RegistryRepository` for loading and saving the whitelist
//! JSON file. The whole registry is read at the start of every operation and written
//! back in full at the end; there is no incremental format.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{
    data::format::to_vec_pretty_ascii,
    error::registry::PersistenceError,
    model::record::Registry,
};

/// Repository providing load and save operations for the registry file.
///
/// This struct holds a reference to the path of the registry file. It keeps no
/// cached state, so two repositories on the same path always observe the same data.
pub struct RegistryRepository<'a> {
    path: &'a Path,
}

impl<'a> RegistryRepository<'a> {
    /// Creates a new RegistryRepository instance.
    ///
    /// # Arguments
    /// - `path` - Path of the registry JSON file
    ///
    /// # Returns
    /// - `RegistryRepository` - New repository instance
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Loads the registry from disk.
    ///
    /// A missing file is an empty registry. A file that is not a JSON array is also
    /// treated as empty and logged as a warning; the next save will overwrite it,
    /// losing its previous contents. Array elements that lack the record shape are
    /// kept untouched and written back by the next save.
    ///
    /// # Returns
    /// - `Ok(Registry)` - Records in file order, or an empty registry
    /// - `Err(PersistenceError::Read)` - File exists but could not be read
    pub async fn load(&self) -> Result<Registry, PersistenceError> {
        let bytes = match tokio::fs::read(self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Registry file {} not found, starting empty", self.path.display());
                return Ok(Registry::default());
            }
            Err(e) => {
                return Err(PersistenceError::Read {
                    path: self.path.to_path_buf(),
                    source: e,
                })
            }
        };

        match serde_json::from_slice::<Registry>(&bytes) {
            Ok(registry) => {
                let opaque = registry.opaque_len();
                if opaque > 0 {
                    tracing::warn!(
                        "Registry file {} has {} entries that are not records, keeping them as-is",
                        self.path.display(),
                        opaque
                    );
                }
                Ok(registry)
            }
            Err(e) => {
                tracing::warn!(
                    "Registry file {} is not valid, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Registry::default())
            }
        }
    }

    /// Saves the registry, replacing the file on disk.
    ///
    /// The serialized registry is written to a sibling temporary file which is then
    /// renamed over the target, so the file is either fully replaced or left as it was.
    ///
    /// # Arguments
    /// - `registry` - Registry to persist
    ///
    /// # Returns
    /// - `Ok(())` - File replaced
    /// - `Err(PersistenceError::Serialize)` - Registry could not be serialized
    /// - `Err(PersistenceError::Write)` - Temporary file write or rename failed
    pub async fn save(&self, registry: &Registry) -> Result<(), PersistenceError> {
        let bytes = to_vec_pretty_ascii(registry)?;
        let tmp_path = self.tmp_path();

        if let Err(e) = tokio::fs::write(&tmp_path, &bytes).await {
            return Err(PersistenceError::Write {
                path: tmp_path,
                source: e,
            });
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(PersistenceError::Write {
                path: self.path.to_path_buf(),
                source: e,
            });
        }

        tracing::debug!(
            "Saved {} records to {}",
            registry.len(),
            self.path.display()
        );

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod test;
