use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Errors that abort a prune run
///
/// Every variant is fatal. Malformed checkpoint names and inverted ranges
/// are not errors and never produce one of these.
#[derive(Error, Debug)]
pub enum PruneError {
    #[error("[E3001] Cannot list directory {}: {}", .path.display(), .source)]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("[E3002] Failed to delete {}: {}", .path.display(), .source)]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("[E1001] Config file not found: {}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("[E1002] Invalid config file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[E1003] Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

impl PruneError {
    /// Create a configuration validation error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::DirectoryUnreadable { .. } => ErrorCode::DIRECTORY_UNREADABLE,
            Self::DeletionFailed { .. } => ErrorCode::DELETION_FAILED,
            Self::ConfigNotFound { .. } => ErrorCode::CONFIG_NOT_FOUND,
            Self::ConfigParse { .. } => ErrorCode::CONFIG_PARSE_ERROR,
            Self::ConfigInvalid { .. } => ErrorCode::CONFIG_INVALID_VALUE,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. } => 2,
            Self::DirectoryUnreadable { .. } => 3,
            Self::DeletionFailed { .. } => 4,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::DirectoryUnreadable { path, source } => format!(
                "Error: cannot read checkpoint folder {}: {}",
                path.display(),
                source
            ),
            Self::DeletionFailed { path, source } => format!(
                "Error: failed to delete {}: {} (files deleted earlier in this run stay deleted)",
                path.display(),
                source
            ),
            Self::ConfigNotFound { path, .. } => {
                format!("Configuration problem: {} does not exist", path.display())
            }
            Self::ConfigParse { path, source } => {
                format!("Configuration problem in {}: {}", path.display(), source)
            }
            Self::ConfigInvalid { message } => format!("Configuration problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PruneError>;
