//! Application configuration
//!
//! This module handles process-wide settings derived from the command line.

use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Config file named on the command line
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            config_path: None,
        }
    }

    /// Set the config file path
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the log filter string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(AppConfig::new(0).log_level(), "warn");
        assert_eq!(AppConfig::new(1).log_level(), "info");
        assert_eq!(AppConfig::new(2).log_level(), "debug");
        assert_eq!(AppConfig::new(3).log_level(), "trace");
        assert_eq!(AppConfig::new(9).log_level(), "trace");
    }

    #[test]
    fn test_with_config_path() {
        let config = AppConfig::new(0).with_config_path(Some(PathBuf::from("c.toml")));
        assert_eq!(config.config_path, Some(PathBuf::from("c.toml")));
    }
}
