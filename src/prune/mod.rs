//! Checkpoint pruning
//!
//! Recognizes checkpoint files by name, selects those whose embedded
//! timestamp lies strictly inside a range, and reports or deletes them in a
//! single pass over one directory.

pub mod pattern;
pub mod range;
pub mod selector;

pub use pattern::{CheckpointName, NamingConvention};
pub use range::TimestampRange;
pub use selector::{prune_checkpoints, PruneRequest, PruneResult, Pruner};
