//! Whitelist Bot Test Utils
//!
//! Provides shared testing utilities for the whitelist bot. This crate offers a builder
//! pattern for creating isolated test workspaces: a temporary directory holding the
//! registry file and, optionally, a git mirror wired to a local bare remote.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test workspaces
//! - **TestContext**: Test workspace with paths and inspection helpers
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory record JSON for seeding registries
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_registry_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_record(fixture::record::json())
//!         .with_git_mirror()
//!         .build()
//!         .await?;
//!
//!     let path = test.registry_path();
//!     // Perform registry operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod git;
