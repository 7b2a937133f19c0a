//! Report headings and end-of-run summary

use std::fmt::Write;

use super::SyncResult;
use crate::path::MAX_LINE_LENGTH;

/// Path column width when only copies are reported
pub const TERSE_FIELD_WIDTH: usize = MAX_LINE_LENGTH - 18;

/// Path column width when every file is reported
pub const VERBOSE_FIELD_WIDTH: usize = MAX_LINE_LENGTH - 26;

const TERSE_HEADING: &str = "                         Pathname                                 Status\n\
----------------------------------------------------------  ------------------";

const VERBOSE_HEADING: &str = "                     Pathname                             Status        Action\n\
--------------------------------------------------  ------------------  ------";

/// Banner printed before the purge candidates
pub const PURGE_BANNER: &str = "\nThe following files in DEST may need to be purged:";

/// Sync report formatter
pub struct SyncReporter;

impl SyncReporter {
    /// Column heading for the status table
    #[must_use]
    pub const fn heading(verbose: bool) -> &'static str {
        if verbose { VERBOSE_HEADING } else { TERSE_HEADING }
    }

    /// Width of the path column for the status table
    #[must_use]
    pub const fn field_width(verbose: bool) -> usize {
        if verbose {
            VERBOSE_FIELD_WIDTH
        } else {
            TERSE_FIELD_WIDTH
        }
    }

    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &SyncResult, dry_run: bool) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        if dry_run {
            output.push_str("(dry run, nothing was copied)\n");
        }
        let _ = writeln!(output, "New:      {}", result.created);
        let _ = writeln!(output, "Updated:  {}", result.updated);
        let _ = writeln!(output, "Skipped:  {}", result.skipped);
        if result.purge_candidates > 0 {
            let _ = writeln!(output, "Purge:    {}", result.purge_candidates);
        }

        if !result.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", result.errors.len());
            for error in &result.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if result.is_success() {
            output.push_str("Status: ✓ Success");
        } else {
            output.push_str("Status: ✗ Completed with errors");
        }

        output
    }
}
