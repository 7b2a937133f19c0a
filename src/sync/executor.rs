//! Applies one comparison: status line, then the copy if it is called for

use std::io::Write;
use std::path::Path;

use tracing::{error, warn};

use super::SyncResult;
use super::actions;
use super::copier::FileCopier;
use super::reporting::SyncReporter;
use crate::comparison::{Comparison, Outcome};
use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::path::format_path;

/// Executes the sync decision for individual files
pub struct FileSyncExecutor {
    config: SyncConfig,
}

impl FileSyncExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Report and, unless this is a dry run, carry out the action for `comparison`
    ///
    /// Per-file failures are logged and recorded in `result`; only a failure
    /// to write the report itself is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if the status line cannot be written.
    pub fn execute<W: Write>(
        &self,
        rel: &Path,
        source: &Path,
        dest: &Path,
        comparison: &Comparison,
        out: &mut W,
        result: &mut SyncResult,
    ) -> Result<()> {
        let action = actions::resolve(comparison.outcome);

        if let Some(message) = action.message(self.config.verbose) {
            let width = SyncReporter::field_width(self.config.verbose);
            writeln!(out, "{}{message}", format_path(&rel.to_string_lossy(), width))?;
        }

        if !action.copy {
            if comparison.outcome == Outcome::Error {
                result.errors.push(format!("{}: stat failed", rel.display()));
            } else {
                result.skipped += 1;
            }
            return Ok(());
        }

        let Some(stat) = comparison.source else {
            result.errors.push(format!("{}: source metadata unavailable", rel.display()));
            return Ok(());
        };

        if !self.config.dry_run {
            match FileCopier::copy(source, dest, stat.size, stat.modified) {
                Ok(()) => {}
                Err(e @ Error::Timestamp { .. }) => warn!("{e}"),
                Err(e) => {
                    error!("{e}");
                    result.errors.push(format!("{}: {e}", rel.display()));
                    return Ok(());
                }
            }
        }

        if comparison.outcome == Outcome::DstNotFound {
            result.created += 1;
        } else {
            result.updated += 1;
        }
        Ok(())
    }
}
