use thiserror::Error;

/// Errors that can occur while building a test workspace.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating directories or writing seed files failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seed records could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A git command used to prepare the workspace failed.
    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },
}
