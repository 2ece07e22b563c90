use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::PrunerConfig;
use crate::error::{PruneError, Result};

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "CKPRUNE_CONFIG";

/// Resolves and loads the pruner configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that consults `path` first, then `CKPRUNE_CONFIG`
    pub fn new(path: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            explicit_path: path,
            env_path,
        }
    }

    /// Loader that ignores the environment
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            explicit_path: path,
            env_path: None,
        }
    }

    /// The file that will be read, if any
    pub fn source(&self) -> Option<&Path> {
        self.explicit_path
            .as_deref()
            .or(self.env_path.as_deref())
    }

    pub fn load(&self) -> Result<PrunerConfig> {
        let config = match self.source() {
            Some(path) => load_file(path)?,
            None => {
                debug!("No config file given, using built-in naming convention");
                PrunerConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<PrunerConfig> {
    debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PruneError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => PruneError::config_invalid(format!("cannot read {}: {}", path.display(), source)),
    })?;
    toml::from_str(&content).map_err(|source| PruneError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
