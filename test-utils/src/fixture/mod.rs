//! Test fixtures providing reusable registry data without touching disk.
//!
//! This module contains fixture functions that create in-memory record JSON for use in
//! unit tests and as seed data for `TestBuilder`. Fixtures produce `serde_json::Value`
//! in the on-disk record shape, so tests exercise the same parsing path as real files.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Record with default values
//! let record = fixture::record::json();
//!
//! // Record with custom fields
//! let record = fixture::record::json_builder()
//!     .discord_id("100")
//!     .vrchat_username("Alice")
//!     .roles(&[1433955314356584540])
//!     .build();
//! ```

pub mod record;

pub use record::{json as record_json, json_builder as record_json_builder};
