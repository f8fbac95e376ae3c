//! Registry service for whitelist business logic.
//!
//! This module provides the `RegistryService`, which implements registration,
//! unregistration and role reconciliation on top of the registry file. Each operation
//! is a transaction: load the registry fresh from disk, validate, mutate, save, and
//! publish. All transactions run under one async mutex, so overlapping events (for
//! example a registration immediately followed by a role update for the same member)
//! are applied one after another instead of overwriting each other.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    data::registry::RegistryRepository,
    error::registry::RegistryError,
    model::{
        allow_list::AllowList,
        record::{ReconcileOutcome, Record, Registry},
    },
    service::publish::Publisher,
};

/// Service providing business logic for the whitelist registry.
///
/// Holds the registry file location, the role allow-list and the publisher. The
/// service keeps no copy of the registry between operations.
pub struct RegistryService {
    path: PathBuf,
    allow_list: AllowList,
    publisher: Arc<dyn Publisher>,
    lock: Mutex<()>,
}

impl RegistryService {
    /// Creates a new RegistryService instance.
    ///
    /// # Arguments
    /// - `path` - Path of the registry JSON file
    /// - `allow_list` - Roles whose holders may register
    /// - `publisher` - Publisher invoked after every successful save
    ///
    /// # Returns
    /// - `RegistryService` - New service instance
    pub fn new(
        path: impl Into<PathBuf>,
        allow_list: AllowList,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            path: path.into(),
            allow_list,
            publisher,
            lock: Mutex::new(()),
        }
    }

    /// Registers a VRChat username for the requesting member.
    ///
    /// The member must hold at least one allow-listed role and must not already be
    /// registered; re-registering requires unregistering first. The username is stored
    /// as given, without validation.
    ///
    /// # Arguments
    /// - `requester_id` - Discord user ID of the member
    /// - `requester_roles` - Role IDs the member currently holds
    /// - `username` - VRChat username to store
    ///
    /// # Returns
    /// - `Ok(Record)` - The newly appended record
    /// - `Err(RegistryError::PermissionDenied)` - Member holds no allowed role
    /// - `Err(RegistryError::AlreadyRegistered)` - Member already has a record
    /// - `Err(RegistryError::PersistenceFailed)` - Registry could not be read or saved
    pub async fn register(
        &self,
        requester_id: u64,
        requester_roles: &[u64],
        username: &str,
    ) -> Result<Record, RegistryError> {
        let allowed = self.allow_list.intersect(requester_roles);
        if allowed.is_empty() {
            tracing::debug!("Member {} denied registration, no allowed role", requester_id);
            return Err(RegistryError::PermissionDenied);
        }

        let _guard = self.lock.lock().await;
        let repo = RegistryRepository::new(&self.path);
        let mut registry = repo.load().await?;

        if let Some(existing) = registry.find(requester_id) {
            return Err(RegistryError::AlreadyRegistered {
                username: existing.vrchat_username.clone(),
            });
        }

        let record = Record::new(requester_id, username, allowed);
        registry.push(record.clone());
        self.commit(&repo, &registry).await?;

        tracing::info!("Registered member {} as '{}'", requester_id, username);

        Ok(record)
    }

    /// Removes the requesting member's record.
    ///
    /// # Arguments
    /// - `requester_id` - Discord user ID of the member
    ///
    /// # Returns
    /// - `Ok(Record)` - The removed record
    /// - `Err(RegistryError::NotRegistered)` - Member has no record
    /// - `Err(RegistryError::PersistenceFailed)` - Registry could not be read or saved
    pub async fn unregister(&self, requester_id: u64) -> Result<Record, RegistryError> {
        let _guard = self.lock.lock().await;
        let repo = RegistryRepository::new(&self.path);
        let mut registry = repo.load().await?;

        let Some(removed) = registry.remove(requester_id) else {
            return Err(RegistryError::NotRegistered);
        };
        self.commit(&repo, &registry).await?;

        tracing::info!("Unregistered member {}", requester_id);

        Ok(removed)
    }

    /// Reconciles a member's stored roles with their current roles.
    ///
    /// Called for every observed role change, registered or not. Members without a
    /// record are ignored. A member who still holds allowed roles has the stored list
    /// replaced; one who holds none is removed from the registry. The username is
    /// never touched.
    ///
    /// When the allowed roles equal the stored ones nothing is saved or published.
    /// As a consequence a member update never retries a push that failed earlier;
    /// the next register, unregister or actual role change pushes the pending commit.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID of the member whose roles changed
    /// - `current_roles` - Role IDs the member holds now
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome::NotRegistered)` - No record, nothing done
    /// - `Ok(ReconcileOutcome::Unchanged)` - Allowed roles unchanged, nothing written
    /// - `Ok(ReconcileOutcome::Updated)` - Roles replaced, registry saved and published
    /// - `Ok(ReconcileOutcome::Removed)` - Record deleted, registry saved and published
    /// - `Err(RegistryError::PersistenceFailed)` - Registry could not be read or saved
    pub async fn reconcile_roles(
        &self,
        member_id: u64,
        current_roles: &[u64],
    ) -> Result<ReconcileOutcome, RegistryError> {
        let _guard = self.lock.lock().await;
        let repo = RegistryRepository::new(&self.path);
        let mut registry = repo.load().await?;

        let allowed = self.allow_list.intersect(current_roles);

        let outcome = {
            let Some(record) = registry.find_mut(member_id) else {
                return Ok(ReconcileOutcome::NotRegistered);
            };

            if allowed.is_empty() {
                None
            } else if record.roles.as_deref() == Some(allowed.as_slice()) {
                return Ok(ReconcileOutcome::Unchanged);
            } else {
                record.roles = Some(allowed);
                Some(record.clone())
            }
        };

        let outcome = match outcome {
            Some(updated) => {
                tracing::info!(
                    "Updated roles of member {} to {:?}",
                    member_id,
                    updated.roles.as_deref().unwrap_or_default()
                );
                ReconcileOutcome::Updated(updated)
            }
            None => {
                let removed = registry
                    .remove(member_id)
                    .ok_or(RegistryError::NotRegistered)?;
                tracing::info!(
                    "Removed member {} ('{}'), no allowed roles left",
                    member_id,
                    removed.vrchat_username
                );
                ReconcileOutcome::Removed(removed)
            }
        };

        self.commit(&repo, &registry).await?;

        Ok(outcome)
    }

    /// Saves the registry and publishes the file.
    ///
    /// The publish outcome is intentionally not part of the result; the publisher
    /// logs and records it.
    async fn commit(
        &self,
        repo: &RegistryRepository<'_>,
        registry: &Registry,
    ) -> Result<(), RegistryError> {
        repo.save(registry).await?;
        let outcome = self.publisher.publish(&self.path).await;
        tracing::debug!("Publish outcome for {}: {:?}", self.path.display(), outcome);
        Ok(())
    }
}

#[cfg(test)]
mod test;
