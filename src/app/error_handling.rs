//! Error handling utilities
//!
//! This module provides centralized handling of fatal errors.

use tracing::error;

use crate::error::PruneError;

/// Report a fatal error and exit with the matching status code
///
/// - `verbose = 0`: user-facing message only
/// - `verbose >= 1`: also prints the error code and source chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(prune_err) = error.downcast_ref::<PruneError>() {
        eprintln!("{}", prune_err.user_message());
        if verbose >= 1 {
            eprintln!(
                "\n[E{:04}] {}",
                prune_err.code(),
                crate::error::describe_error_code(prune_err.code())
            );
        }
        prune_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        1
    };

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}
