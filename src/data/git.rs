//! Git client for the local whitelist mirror.
//!
//! This module provides `GitClient`, a thin wrapper around the `git` binary that runs
//! one subcommand at a time against the mirror directory. Every invocation is bounded
//! by a timeout and the child process is killed if the timeout expires.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::git::GitError;

/// Runs git subcommands against a local repository.
#[derive(Debug, Clone)]
pub struct GitClient {
    repo_path: PathBuf,
    timeout: Duration,
}

impl GitClient {
    /// Creates a new GitClient instance.
    ///
    /// # Arguments
    /// - `repo_path` - Working tree of the local mirror
    /// - `timeout` - Upper bound for each git invocation
    ///
    /// # Returns
    /// - `GitClient` - New client instance
    pub fn new(repo_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            repo_path: repo_path.into(),
            timeout,
        }
    }

    /// Returns the name of the currently checked out branch.
    pub async fn current_branch(&self) -> Result<String, GitError> {
        self.run("rev-parse", &["--abbrev-ref", "HEAD"]).await
    }

    /// Stages a file for the next commit.
    pub async fn add(&self, file: &Path) -> Result<(), GitError> {
        self.run_path("add", &[], file).await.map(|_| ())
    }

    /// Checks whether a file has staged changes.
    ///
    /// Runs `git diff --cached --quiet`, which exits 0 when nothing is staged and 1
    /// when there are staged changes.
    ///
    /// # Returns
    /// - `Ok(true)` - The file has staged changes
    /// - `Ok(false)` - Nothing is staged for the file
    /// - `Err(GitError)` - Git failed for another reason
    pub async fn has_staged_changes(&self, file: &Path) -> Result<bool, GitError> {
        match self.run_path("diff", &["--cached", "--quiet"], file).await {
            Ok(_) => Ok(false),
            Err(GitError::Exit { code: Some(1), .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Creates a commit with the given message from the staged changes.
    pub async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run("commit", &["-m", message]).await.map(|_| ())
    }

    /// Pushes a branch to a destination.
    ///
    /// The destination is passed directly on the command line and may carry
    /// credentials; it is never included in logs emitted here.
    ///
    /// # Arguments
    /// - `destination` - Remote URL or name
    /// - `branch` - Branch to push
    pub async fn push(&self, destination: &str, branch: &str) -> Result<(), GitError> {
        self.run("push", &[destination, branch]).await.map(|_| ())
    }

    /// Runs a subcommand with a trailing pathspec.
    ///
    /// The path is made relative to the repository when it lies inside it, and is
    /// separated from the options with `--`.
    async fn run_path(
        &self,
        command: &str,
        args: &[&str],
        file: &Path,
    ) -> Result<String, GitError> {
        let relative = file.strip_prefix(&self.repo_path).unwrap_or(file);
        let relative = relative.to_string_lossy();

        let mut full_args: Vec<&str> = args.to_vec();
        full_args.push("--");
        full_args.push(&relative);

        self.run(command, &full_args).await
    }

    /// Runs `git -C <repo> <command> <args...>` with the configured timeout.
    ///
    /// # Returns
    /// - `Ok(String)` - Trimmed standard output
    /// - `Err(GitError::Spawn)` - Git could not be started
    /// - `Err(GitError::Timeout)` - Git did not finish in time and was killed
    /// - `Err(GitError::Exit)` - Git exited with a non-zero status
    async fn run(&self, command: &str, args: &[&str]) -> Result<String, GitError> {
        tracing::debug!("Running git {} in {}", command, self.repo_path.display());

        let mut cmd = Command::new("git");
        cmd.arg("-C")
            .arg(&self.repo_path)
            .arg(command)
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(GitError::Spawn {
                    command: command.to_string(),
                    source: e,
                })
            }
            Err(_) => {
                return Err(GitError::Timeout {
                    command: command.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            return Err(GitError::Exit {
                command: command.to_string(),
                status: output.status.to_string(),
                code: output.status.code(),
                stderr: if stderr.is_empty() { stdout } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
