//! Scan-and-act loop over a checkpoint directory

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use super::pattern::NamingConvention;
use super::range::TimestampRange;
use crate::abstractions::{CheckpointFs, DirEntryInfo, RealCheckpointFs};
use crate::error::{PruneError, Result};

/// Parameters for one prune run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneRequest {
    pub folder: PathBuf,
    pub range: TimestampRange,
    /// Report matches without deleting them
    pub dry_run: bool,
}

impl PruneRequest {
    pub fn new(folder: impl Into<PathBuf>, start: i64, end: i64) -> Self {
        Self {
            folder: folder.into(),
            range: TimestampRange::new(start, end),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a successful prune run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneResult {
    /// Matched filenames in directory enumeration order
    pub selected: Vec<String>,
    pub dry_run: bool,
}

impl PruneResult {
    pub fn total(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Selects checkpoint files by embedded timestamp and optionally removes them
pub struct Pruner<F: CheckpointFs> {
    fs: F,
    naming: NamingConvention,
}

impl Pruner<RealCheckpointFs> {
    /// Pruner over the real filesystem using the default naming convention
    pub fn local() -> Self {
        Self::new(RealCheckpointFs::new(), NamingConvention::default())
    }
}

impl<F: CheckpointFs> Pruner<F> {
    pub fn new(fs: F, naming: NamingConvention) -> Self {
        Self { fs, naming }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Run a single pass over `request.folder`
    ///
    /// The listing is read in full first; an unreadable directory aborts
    /// before any deletion. Each entry is then matched and, unless `dry_run`
    /// is set, deleted as soon as it is selected.
    /// The first failed deletion aborts the run; files removed before it stay
    /// removed.
    pub fn run(&self, request: &PruneRequest) -> Result<PruneResult> {
        let folder = request.folder.as_path();
        info!(
            "Scanning {} for checkpoints in {}{}",
            folder.display(),
            request.range,
            if request.dry_run { " (dry run)" } else { "" }
        );
        if request.range.is_vacuous() {
            warn!(
                "Start bound {} is not below end bound {}; nothing can match",
                request.range.start, request.range.end
            );
        }

        // Read the whole listing before deleting anything
        let entries: Vec<DirEntryInfo> = self
            .fs
            .entries(folder)
            .and_then(|listing| listing.collect::<io::Result<Vec<_>>>())
            .map_err(|source| unreadable(folder, source))?;

        let mut result = PruneResult {
            selected: Vec::new(),
            dry_run: request.dry_run,
        };

        for entry in entries {
            if entry.is_dir {
                trace!("Skipping directory {:?}", entry.name);
                continue;
            }
            // Non UTF-8 names can never match the grammar
            let Some(name) = entry.name.to_str() else {
                trace!("Skipping non UTF-8 entry {:?}", entry.name);
                continue;
            };
            let Some(checkpoint) = self.naming.parse(name) else {
                trace!("Skipping {name}: not a checkpoint name");
                continue;
            };
            if !request.range.contains(checkpoint.timestamp) {
                trace!("Skipping {name}: timestamp {} out of range", checkpoint.timestamp);
                continue;
            }

            debug!(
                "Selected {name} (epoch {}, timestamp {})",
                checkpoint.epoch, checkpoint.timestamp
            );
            if !request.dry_run {
                let path = folder.join(name);
                self.fs
                    .remove_file(&path)
                    .map_err(|source| PruneError::DeletionFailed {
                        path: path.clone(),
                        source,
                    })?;
                info!("Deleted {}", path.display());
            }
            result.selected.push(checkpoint.filename);
        }

        info!("{} checkpoint(s) matched", result.total());
        Ok(result)
    }
}

fn unreadable(folder: &Path, source: io::Error) -> PruneError {
    PruneError::DirectoryUnreadable {
        path: folder.to_path_buf(),
        source,
    }
}

/// Select checkpoints in `folder` with `start < timestamp < end`, deleting
/// them unless `dry_run` is set. Returns the matched filenames.
pub fn prune_checkpoints(
    folder: impl AsRef<Path>,
    start: i64,
    end: i64,
    dry_run: bool,
) -> Result<Vec<String>> {
    let request = PruneRequest::new(folder.as_ref(), start, end).with_dry_run(dry_run);
    Pruner::local().run(&request).map(|result| result.selected)
}
