//! Abstraction layers for external dependencies
//!
//! This module provides trait-based abstractions for the host filesystem
//! to enable better testing and dependency injection.

pub mod fs;

pub use fs::{CheckpointFs, DirEntryInfo, EntryIter, MockCheckpointFs, RealCheckpointFs};
