//! Destination tree scanning for purge candidates
//!
//! Every entry under the destination root is checked against the source
//! tree, first through the [`SkipList`] and then with a plain stat. Entries
//! with no source counterpart are reported. An orphaned directory is
//! reported once and not descended into.

mod skip_list;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, warn};
use walkdir::WalkDir;

pub use skip_list::SkipList;

use crate::error::Result;
use crate::path::build_absolute;

/// A destination entry with no counterpart in the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeCandidate {
    /// Path relative to the destination root
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Result of a purge scan with non-fatal errors
#[derive(Debug, Clone, Default)]
pub struct PurgeReport {
    /// Orphaned entries, in traversal order
    pub candidates: Vec<PurgeCandidate>,
    /// Diagnostics for branches that could not be examined
    pub errors: Vec<String>,
}

/// Walks a destination tree looking for entries missing from the source
pub struct PurgeScanner<'a> {
    skip_list: &'a SkipList,
}

impl<'a> PurgeScanner<'a> {
    /// Create a scanner that trusts `skip_list` as known source paths
    #[must_use]
    pub const fn new(skip_list: &'a SkipList) -> Self {
        Self { skip_list }
    }

    /// Scan `dest_root`, resolving each entry against `source_root`
    ///
    /// Unreadable directories and failed stat calls are logged and recorded
    /// in the report; the rest of the tree is still scanned.
    ///
    /// # Errors
    ///
    /// Returns an error if a composed source path exceeds the path length limit.
    pub fn scan(&self, source_root: &Path, dest_root: &Path) -> Result<PurgeReport> {
        let mut report = PurgeReport::default();
        let mut walker = WalkDir::new(dest_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "cannot read destination directory");
                    report.errors.push(e.to_string());
                    continue;
                }
            };

            let Ok(rel) = entry.path().strip_prefix(dest_root) else {
                continue;
            };
            let is_dir = entry.file_type().is_dir();
            let source = build_absolute(source_root, rel)?;

            let known = if is_dir {
                self.skip_list.contains_descendant_of(&source)
            } else {
                self.skip_list.contains_file(&source)
            };

            let exists = known
                || match fs::metadata(&source) {
                    Ok(_) => true,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                    Err(e) => {
                        error!(path = %source.display(), error = %e, "stat failed");
                        report
                            .errors
                            .push(format!("stat failed for {}: {e}", source.display()));
                        if is_dir {
                            walker.skip_current_dir();
                        }
                        continue;
                    }
                };

            if !exists {
                report.candidates.push(PurgeCandidate {
                    path: rel.to_path_buf(),
                    is_dir,
                });
                if is_dir {
                    walker.skip_current_dir();
                }
            }
        }

        Ok(report)
    }
}
