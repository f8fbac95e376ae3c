//! Publish service for backing up the whitelist to a remote git repository.
//!
//! This module provides the `Publisher` trait the registry service depends on, and
//! `PublishService`, its git-backed implementation. Publishing is best effort: each
//! attempt stages and commits the registry file in the local mirror and pushes the
//! current branch to the configured remote. Failures are logged, recorded in the
//! `PublishHistory`, and otherwise swallowed.

pub mod history;
pub mod remote;

use std::path::Path;

use chrono::Utc;
use serenity::async_trait;

use crate::{
    data::git::GitClient,
    error::git::GitError,
    model::publish::{PublishOutcome, PublishReport, PublishStep},
    service::publish::{history::PublishHistory, remote::RemoteTarget},
};

/// Commit message used for every whitelist update.
pub const COMMIT_MESSAGE: &str = "Update whitelist";

/// Propagates a snapshot of the registry file to a durable remote location.
///
/// Implementations must not fail: every problem is reported through the returned
/// outcome so callers can ignore it without affecting their own result.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes the current contents of `file`.
    async fn publish(&self, file: &Path) -> PublishOutcome;
}

/// Git-backed publisher pushing the local mirror to a remote.
pub struct PublishService {
    git: GitClient,
    remote: Option<RemoteTarget>,
    history: PublishHistory,
}

impl PublishService {
    /// Creates a new PublishService instance.
    ///
    /// # Arguments
    /// - `git` - Client for the local mirror containing the registry file
    /// - `remote` - Push destination, `None` when credentials are not configured
    /// - `history` - History that receives a report for every attempt
    ///
    /// # Returns
    /// - `PublishService` - New service instance
    pub fn new(git: GitClient, remote: Option<RemoteTarget>, history: PublishHistory) -> Self {
        Self {
            git,
            remote,
            history,
        }
    }

    pub fn history(&self) -> &PublishHistory {
        &self.history
    }

    /// Runs the branch, stage, commit and push steps in order.
    ///
    /// Stops at the first failing step. The commit step is skipped when the file has
    /// no staged changes, which happens when a save reproduced the committed bytes.
    async fn publish_to(&self, remote: &RemoteTarget, file: &Path) -> PublishOutcome {
        let branch = match self.git.current_branch().await {
            Ok(branch) => branch,
            Err(e) => return self.failed(remote, PublishStep::Branch, e),
        };
        tracing::debug!("Current branch: {}", branch);

        if let Err(e) = self.git.add(file).await {
            return self.failed(remote, PublishStep::Stage, e);
        }

        let committed = match self.git.has_staged_changes(file).await {
            Ok(true) => match self.git.commit(COMMIT_MESSAGE).await {
                Ok(()) => true,
                Err(e) => return self.failed(remote, PublishStep::Commit, e),
            },
            Ok(false) => {
                tracing::info!("Nothing to commit for {}, skipping commit", file.display());
                false
            }
            Err(e) => return self.failed(remote, PublishStep::Diff, e),
        };

        if let Err(e) = self.git.push(remote.url(), &branch).await {
            return self.failed(remote, PublishStep::Push, e);
        }

        PublishOutcome::Published { branch, committed }
    }

    fn failed(&self, remote: &RemoteTarget, step: PublishStep, err: GitError) -> PublishOutcome {
        PublishOutcome::Failed {
            step,
            reason: remote.redact(&err.to_string()),
        }
    }
}

#[async_trait]
impl Publisher for PublishService {
    /// Publishes the registry file and records the outcome.
    ///
    /// Missing credentials skip the attempt entirely with a warning. Every outcome is
    /// logged and appended to the history; none is returned as an error.
    ///
    /// # Arguments
    /// - `file` - Registry file inside the local mirror
    ///
    /// # Returns
    /// - `PublishOutcome` - Result of the attempt
    async fn publish(&self, file: &Path) -> PublishOutcome {
        let outcome = match &self.remote {
            None => {
                tracing::warn!("Git remote credentials missing, skipping whitelist upload");
                PublishOutcome::Skipped
            }
            Some(remote) => self.publish_to(remote, file).await,
        };

        match &outcome {
            PublishOutcome::Published { branch, committed } => tracing::info!(
                "{} uploaded to branch {} (new commit: {})",
                file.display(),
                branch,
                committed
            ),
            PublishOutcome::Failed { step, reason } => {
                tracing::error!("Whitelist upload failed at {} step: {}", step, reason)
            }
            PublishOutcome::Skipped => {}
        }

        self.history
            .record(PublishReport {
                at: Utc::now(),
                file: file.to_path_buf(),
                outcome: outcome.clone(),
            })
            .await;

        outcome
    }
}
