use std::time::Duration;

use thiserror::Error;

/// Failures of a single `git` invocation against the local mirror.
///
/// These never reach a requester. The publisher converts them into a failed
/// publish outcome after redacting any credential from the message.
#[derive(Error, Debug)]
pub enum GitError {
    /// The `git` binary could not be started.
    #[error("Failed to run git {command}: {source}")]
    Spawn {
        /// Subcommand that was being run, e.g. `push`
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command did not finish within the configured timeout.
    ///
    /// The child process is killed when the timeout expires.
    #[error("git {command} timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    /// The command ran but exited unsuccessfully.
    #[error("git {command} exited with {status}: {stderr}")]
    Exit {
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Exit code, absent when the process was killed by a signal
        code: Option<i32>,
        /// Trimmed standard error output
        stderr: String,
    },
}
