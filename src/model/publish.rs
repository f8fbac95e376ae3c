//! Publish outcome models.
//!
//! The publish step never fails the operation that triggered it. Instead each
//! attempt produces a `PublishOutcome`, wrapped in a timestamped `PublishReport`
//! and kept in the publish history for later inspection.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// The git step a publish attempt was on when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// Resolving the current branch of the local mirror.
    Branch,
    /// Staging the registry file.
    Stage,
    /// Checking whether anything is staged.
    Diff,
    /// Creating the commit.
    Commit,
    /// Pushing to the remote.
    Push,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Branch => "branch",
            Self::Stage => "stage",
            Self::Diff => "diff",
            Self::Commit => "commit",
            Self::Push => "push",
        };
        f.write_str(name)
    }
}

/// Outcome of a single publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The file was pushed to the remote.
    ///
    /// # Fields
    /// - `branch` - Branch that was pushed
    /// - `committed` - Whether a new commit was created; `false` when the file
    ///   had no changes since the last publish
    Published { branch: String, committed: bool },

    /// No credentials are configured, so no attempt was made.
    Skipped,

    /// A git step failed; later steps were not attempted.
    ///
    /// # Fields
    /// - `step` - Step that failed
    /// - `reason` - Error description with credentials redacted
    Failed { step: PublishStep, reason: String },
}

impl PublishOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Timestamped record of a publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub at: DateTime<Utc>,
    pub file: PathBuf,
    pub outcome: PublishOutcome,
}
