//! Git helpers for preparing and inspecting test repositories.

use std::path::Path;

use tokio::process::Command;

use crate::error::TestError;

/// Checks whether a usable `git` binary is on the PATH.
///
/// Tests that drive real git return early when this is `false`, so the suite
/// still runs on machines without git installed.
pub async fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs git in `dir` and returns trimmed stdout.
///
/// # Arguments
/// - `dir` - Working directory passed via `-C`
/// - `args` - Git arguments
///
/// # Returns
/// - `Ok(String)` - Trimmed standard output
/// - `Err(TestError::Git)` - Command could not run or exited unsuccessfully
pub async fn run_git(dir: &Path, args: &[&str]) -> Result<String, TestError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .await?;

    if !output.status.success() {
        return Err(TestError::Git {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Installs an executable hook script in a repository.
///
/// # Arguments
/// - `repo` - Working tree of the repository
/// - `name` - Hook name, e.g. `pre-commit`
/// - `script` - Full script contents including the shebang line
///
/// # Returns
/// - `Ok(())` - Hook written and marked executable
/// - `Err(TestError::Io)` - Hook could not be written
#[cfg(unix)]
pub async fn install_hook(repo: &Path, name: &str, script: &str) -> Result<(), TestError> {
    use std::os::unix::fs::PermissionsExt;

    let path = repo.join(".git").join("hooks").join(name);
    tokio::fs::create_dir_all(repo.join(".git").join("hooks")).await?;
    tokio::fs::write(&path, script).await?;
    tokio::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).await?;

    Ok(())
}
