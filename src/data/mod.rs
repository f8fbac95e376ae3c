//! Data layer for the registry file and the local git mirror.
//!
//! This module contains the repository that loads and saves the whitelist JSON file,
//! the formatter that keeps its on-disk layout stable across rewrites, and the git
//! client used by the publisher. Nothing above this layer touches the filesystem or
//! spawns processes directly.

pub mod format;
pub mod git;
pub mod registry;
