//! # ckprune
//!
//! Prunes periodic checkpoint files from a directory by the timestamp
//! embedded in their names.
//!
//! ## Usage
//!
//! ```bash
//! ckprune <folder> <start_ts> <end_ts> [--dry-run]
//! ```
//!
//! Files named `net_weights_epoch_<epoch>_<timestamp>.pth` whose timestamp
//! lies strictly between `start_ts` and `end_ts` are deleted, or only listed
//! with `--dry-run`.
//!
//! ## Modules
//!
//! - `abstractions` - Trait-based abstraction over the filesystem
//! - `app` - Logging setup and fatal error handling
//! - `cli` - Command-line arguments and report output
//! - `config` - Naming convention configuration
//! - `error` - Error taxonomy with codes and exit statuses
//! - `prune` - Filename grammar, timestamp range and the prune loop
pub mod abstractions;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod prune;

pub use error::{PruneError, Result};
pub use prune::{prune_checkpoints, PruneRequest, PruneResult, Pruner};
