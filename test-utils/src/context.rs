use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::{builder::REGISTRY_FILE, error::TestError, git::run_git};

/// Test workspace containing the registry file location and optional git repositories.
///
/// Everything lives under a temporary directory that is removed when the context is
/// dropped, so tests never share state.
pub struct TestContext {
    /// Temporary root directory owning the workspace.
    dir: TempDir,

    /// Local mirror directory holding the registry file.
    ///
    /// Always created; it is a git repository only when the builder was asked
    /// for a git mirror.
    repo: PathBuf,
}

impl TestContext {
    /// Creates a new empty workspace.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Workspace with an empty mirror directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let repo = dir.path().join("mirror");
        std::fs::create_dir_all(&repo)?;

        Ok(Self { dir, repo })
    }

    /// Root of the temporary workspace.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Local mirror directory.
    pub fn repo_path(&self) -> &Path {
        &self.repo
    }

    /// Path of the registry file inside the mirror.
    pub fn registry_path(&self) -> PathBuf {
        self.repo.join(REGISTRY_FILE)
    }

    /// Path of the bare remote repository.
    pub fn remote_path(&self) -> PathBuf {
        self.dir.path().join("remote.git")
    }

    /// Reads the raw bytes of the registry file.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - File contents
    /// - `Err(TestError::Io)` - File missing or unreadable
    pub async fn registry_bytes(&self) -> Result<Vec<u8>, TestError> {
        Ok(tokio::fs::read(self.registry_path()).await?)
    }

    /// Reads and parses the registry file.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed JSON document
    /// - `Err(TestError)` - File missing, unreadable or not JSON
    pub async fn registry_json(&self) -> Result<Value, TestError> {
        let bytes = self.registry_bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Current branch of the mirror.
    pub async fn mirror_branch(&self) -> Result<String, TestError> {
        run_git(&self.repo, &["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    /// Number of commits on the mirror's current branch.
    pub async fn mirror_commit_count(&self) -> Result<usize, TestError> {
        let count = run_git(&self.repo, &["rev-list", "--count", "HEAD"]).await?;
        Ok(count.parse().unwrap_or(0))
    }

    /// Commit subjects on a branch of the bare remote, newest first.
    ///
    /// # Arguments
    /// - `branch` - Branch name to list
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Commit subjects
    /// - `Err(TestError::Git)` - Branch does not exist on the remote
    pub async fn remote_log(&self, branch: &str) -> Result<Vec<String>, TestError> {
        let log = run_git(&self.remote_path(), &["log", "--format=%s", branch]).await?;
        Ok(log.lines().map(str::to_string).collect())
    }

    /// Contents of the registry file at the tip of a remote branch.
    pub async fn remote_registry(&self, branch: &str) -> Result<String, TestError> {
        let object = format!("{}:{}", branch, REGISTRY_FILE);
        run_git(&self.remote_path(), &["show", &object]).await
    }
}
