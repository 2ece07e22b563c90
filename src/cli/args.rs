//! CLI argument structures

use clap::Parser;
use std::path::PathBuf;

/// Delete checkpoint files whose timestamps fall between two values
#[derive(Parser, Debug)]
#[command(name = "ckprune")]
#[command(
    about = "ckprune - Delete checkpoint files whose timestamps fall between two values",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to checkpoint folder
    pub folder: PathBuf,

    /// Start timestamp (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub start_ts: i64,

    /// End timestamp (exclusive)
    #[arg(allow_negative_numbers = true)]
    pub end_ts: i64,

    /// Show which files would be deleted without deleting them
    #[arg(long)]
    pub dry_run: bool,

    /// TOML file overriding the checkpoint naming convention
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
