use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Value};

use crate::{context::TestContext, error::TestError, git::run_git};

/// Name of the registry file inside the test workspace.
pub const REGISTRY_FILE: &str = "whitelist.json";

/// Seed content for the registry file.
enum Seed {
    /// No file is written.
    None,
    /// Records written as a four-space indented JSON array.
    Records(Vec<Value>),
    /// Exact bytes written as-is, e.g. corrupted or hand-formatted files.
    Raw(Vec<u8>),
}

/// Builder for creating isolated test workspaces.
///
/// Provides a fluent interface for seeding the registry file and optionally setting
/// up a git mirror with a bare remote. Call `build()` to create the workspace in a
/// fresh temporary directory that is deleted when the `TestContext` is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_record(fixture::record::json())
///     .with_git_mirror()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    seed: Seed,
    git_mirror: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no registry file and no git mirror.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            seed: Seed::None,
            git_mirror: false,
        }
    }

    /// Adds a record to the seeded registry file.
    ///
    /// Records are written in the order they are added. Chain multiple calls to seed
    /// several records.
    ///
    /// # Arguments
    /// - `record` - Record JSON, usually from `fixture::record`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_record(mut self, record: Value) -> Self {
        match &mut self.seed {
            Seed::Records(records) => records.push(record),
            _ => self.seed = Seed::Records(vec![record]),
        }
        self
    }

    /// Seeds an empty registry array.
    pub fn with_empty_registry(mut self) -> Self {
        self.seed = Seed::Records(Vec::new());
        self
    }

    /// Seeds the registry file with exact bytes.
    ///
    /// Replaces any records added earlier.
    ///
    /// # Arguments
    /// - `contents` - File contents written verbatim
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_registry(mut self, contents: impl Into<Vec<u8>>) -> Self {
        self.seed = Seed::Raw(contents.into());
        self
    }

    /// Initializes the workspace as a git repository with a bare remote.
    ///
    /// The mirror gets a committer identity, signing disabled, and an initial
    /// commit containing the seeded registry file (if any), so the current branch
    /// resolves. The bare remote starts empty.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_git_mirror(mut self) -> Self {
        self.git_mirror = true;
        self
    }

    /// Builds the test workspace.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Workspace ready for use
    /// - `Err(TestError::Io)` - Failed to create directories or write the seed file
    /// - `Err(TestError::Git)` - Failed to initialize the mirror or remote
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.seed {
            Seed::None => {}
            Seed::Records(records) => {
                let bytes = render_records(&records)?;
                tokio::fs::write(context.registry_path(), bytes).await?;
            }
            Seed::Raw(bytes) => {
                tokio::fs::write(context.registry_path(), bytes).await?;
            }
        }

        if self.git_mirror {
            init_git_mirror(&context).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders records as a four-space indented JSON array without a trailing newline.
pub fn render_records(records: &[Value]) -> Result<Vec<u8>, TestError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    Ok(out)
}

async fn init_git_mirror(context: &TestContext) -> Result<(), TestError> {
    let remote = context.remote_path();
    tokio::fs::create_dir_all(&remote).await?;
    run_git(&remote, &["init", "--bare", "--quiet"]).await?;

    let repo = context.repo_path();
    run_git(repo, &["init", "--quiet"]).await?;
    run_git(repo, &["config", "user.email", "test@example.com"]).await?;
    run_git(repo, &["config", "user.name", "Test"]).await?;
    run_git(repo, &["config", "commit.gpgsign", "false"]).await?;
    run_git(repo, &["add", "--all"]).await?;
    run_git(
        repo,
        &["commit", "--quiet", "--allow-empty", "-m", "Initial commit"],
    )
    .await?;

    Ok(())
}
