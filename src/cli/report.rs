//! Human-readable prune report

use std::io::{self, Write};

use crate::prune::PruneResult;

/// Write the report for `result` to `out`
pub fn write_report<W: Write>(out: &mut W, result: &PruneResult) -> io::Result<()> {
    if result.dry_run {
        writeln!(out, "Dry run — files that would be deleted:")?;
    } else {
        writeln!(out, "Deleted files:")?;
    }

    for name in &result.selected {
        writeln!(out, "  {}", name)?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {} files", result.total())
}
