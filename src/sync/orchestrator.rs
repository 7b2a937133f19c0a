//! Sync orchestration - coordinates the sync workflow

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SyncResult;
use super::executor::FileSyncExecutor;
use super::reporting::{PURGE_BANNER, SyncReporter};
use crate::comparison::FileComparator;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::path::{MAX_LINE_LENGTH, build_absolute, format_path};
use crate::scanner::{PurgeScanner, SkipList};

/// Main sync engine
pub struct SyncEngine {
    config: SyncConfig,
}

impl SyncEngine {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Synchronize `rel_paths` from `source_root` into `dest_root`, writing the report to `out`
    ///
    /// An empty path list produces no output at all.
    ///
    /// # Errors
    ///
    /// Returns an error if a composed path is too long or the report cannot
    /// be written. Per-file failures are recorded in the returned result.
    pub fn run<W: Write>(
        &self,
        source_root: &Path,
        dest_root: &Path,
        rel_paths: &[PathBuf],
        out: &mut W,
    ) -> Result<SyncResult> {
        let mut result = SyncResult::default();
        if rel_paths.is_empty() {
            return Ok(result);
        }

        writeln!(out)?;
        writeln!(out, "{}", SyncReporter::heading(self.config.verbose))?;

        let executor = FileSyncExecutor::new(self.config);
        for rel in rel_paths {
            let source = build_absolute(source_root, rel)?;
            let dest = build_absolute(dest_root, rel)?;

            let comparison = FileComparator::compare(&source, &dest);
            debug!(path = %rel.display(), outcome = ?comparison.outcome, "compared");

            executor.execute(rel, &source, &dest, &comparison, out, &mut result)?;
        }

        if self.config.purge {
            writeln!(out, "{PURGE_BANNER}")?;

            let skip_list = SkipList::build(source_root, rel_paths)?;
            let report = PurgeScanner::new(&skip_list).scan(source_root, dest_root)?;

            // Lossy for display only; matching and stat use the raw path
            for candidate in &report.candidates {
                write!(
                    out,
                    "{}",
                    format_path(&candidate.path.to_string_lossy(), MAX_LINE_LENGTH)
                )?;
            }
            result.purge_candidates = report.candidates.len();
            result.errors.extend(report.errors);
        }

        if self.config.verbose {
            writeln!(
                out,
                "{}",
                SyncReporter::generate_summary(&result, self.config.dry_run)
            )?;
        }

        writeln!(out)?;
        out.flush()?;
        Ok(result)
    }
}
