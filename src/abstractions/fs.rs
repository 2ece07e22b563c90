//! Filesystem abstraction layer
//!
//! Provides a trait-based seam over directory listing and file removal so
//! the prune loop can be exercised without touching a real disk.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single directory entry as seen by the pruner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// The bare entry name, not a path
    pub name: OsString,
    /// Whether the entry itself is a directory (symlinks are not followed)
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Lazily yielded directory listing
pub type EntryIter<'a> = Box<dyn Iterator<Item = io::Result<DirEntryInfo>> + 'a>;

/// Trait for the filesystem operations the pruner needs
pub trait CheckpointFs {
    /// List the immediate entries of `dir` in the order the backend yields them
    fn entries<'a>(&'a self, dir: &Path) -> io::Result<EntryIter<'a>>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// Real implementation backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct RealCheckpointFs;

impl RealCheckpointFs {
    pub fn new() -> Self {
        Self
    }
}

impl CheckpointFs for RealCheckpointFs {
    fn entries<'a>(&'a self, dir: &Path) -> io::Result<EntryIter<'a>> {
        let read_dir = fs::read_dir(dir)?;
        Ok(Box::new(read_dir.map(|entry| {
            let entry = entry?;
            let file_type = entry.file_type()?;
            Ok(DirEntryInfo {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
            })
        })))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[derive(Debug, Default)]
struct MockState {
    entries: Vec<DirEntryInfo>,
    removed: Vec<PathBuf>,
}

/// In-memory implementation for testing
///
/// Holds a single flat directory. Removing a file drops it from the listing
/// so subsequent runs observe the deletion.
#[derive(Debug, Default)]
pub struct MockCheckpointFs {
    state: Mutex<MockState>,
    /// When set, listing fails with this error kind
    pub list_error: Option<io::ErrorKind>,
    /// When set, the listing yields an error in place of the entry at this index
    pub entry_error_at: Option<usize>,
    /// Entry names whose removal fails with `PermissionDenied`
    pub fail_removal: HashSet<String>,
}

impl MockCheckpointFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock directory holding the given regular files, in order
    pub fn with_files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mock = Self::new();
        for name in names {
            mock.add_entry(DirEntryInfo::file(name));
        }
        mock
    }

    pub fn add_entry(&self, entry: DirEntryInfo) {
        self.lock().entries.push(entry);
    }

    /// Make listing fail with the given error kind
    pub fn failing_listing(mut self, kind: io::ErrorKind) -> Self {
        self.list_error = Some(kind);
        self
    }

    /// Make the listing fail part way through, at entry `index`
    pub fn failing_entry(mut self, index: usize) -> Self {
        self.entry_error_at = Some(index);
        self
    }

    /// Make removal of `name` fail
    pub fn failing_removal(mut self, name: &str) -> Self {
        self.fail_removal.insert(name.to_string());
        self
    }

    /// Names currently present, in listing order
    pub fn names(&self) -> Vec<String> {
        self.lock()
            .entries
            .iter()
            .map(|e| e.name.to_string_lossy().into_owned())
            .collect()
    }

    /// Paths passed to successful `remove_file` calls, in call order
    pub fn removed(&self) -> Vec<PathBuf> {
        self.lock().removed.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CheckpointFs for MockCheckpointFs {
    fn entries<'a>(&'a self, dir: &Path) -> io::Result<EntryIter<'a>> {
        if let Some(kind) = self.list_error {
            return Err(io::Error::new(
                kind,
                format!("mock listing of {} refused", dir.display()),
            ));
        }
        let snapshot = self.lock().entries.clone();
        let fail_at = self.entry_error_at;
        Ok(Box::new(snapshot.into_iter().enumerate().map(
            move |(index, entry)| {
                if fail_at == Some(index) {
                    Err(io::Error::new(io::ErrorKind::NotFound, "mock entry vanished"))
                } else {
                    Ok(entry)
                }
            },
        )))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        if self.fail_removal.contains(name.to_string_lossy().as_ref()) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock removal refused",
            ));
        }

        let mut state = self.lock();
        let position = state
            .entries
            .iter()
            .position(|e| !e.is_dir && e.name == name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such mock file"))?;
        state.entries.remove(position);
        state.removed.push(path.to_path_buf());
        Ok(())
    }
}
