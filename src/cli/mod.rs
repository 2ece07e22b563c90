//! CLI module
//!
//! Argument parsing, command execution and report output for the
//! `ckprune` binary.

pub mod args;
pub mod report;

pub use args::Cli;
pub use report::write_report;

use anyhow::{Context, Result};
use tracing::debug;

use crate::abstractions::RealCheckpointFs;
use crate::app::AppConfig;
use crate::config::ConfigLoader;
use crate::prune::{PruneRequest, PruneResult, Pruner};

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(self.verbose).with_config_path(self.config.clone())
    }

    pub fn request(&self) -> PruneRequest {
        PruneRequest::new(&self.folder, self.start_ts, self.end_ts).with_dry_run(self.dry_run)
    }
}

/// Load configuration and run the prune described by `cli`
pub fn execute(cli: &Cli) -> Result<PruneResult> {
    let app_config = cli.app_config();
    let loader = ConfigLoader::new(app_config.config_path.clone());
    let config = loader.load()?;
    debug!("Using naming convention {:?}", config.naming);

    let pruner = Pruner::new(RealCheckpointFs::new(), config.naming);
    let result = pruner.run(&cli.request())?;
    Ok(result)
}

/// Run `cli` and print the report to stdout
pub fn run(cli: &Cli) -> Result<()> {
    let result = execute(cli)?;
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &result).context("Failed to write report")?;
    Ok(())
}
