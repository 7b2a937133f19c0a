//! One-way synchronization engine
//!
//! Each listed file is compared, reported according to the verbosity, and
//! copied when the source is newer or the destination is missing.

mod actions;
mod copier;
mod executor;
mod orchestrator;
mod reporting;

pub use actions::{SyncAction, resolve};
pub use copier::FileCopier;
pub use executor::FileSyncExecutor;
pub use orchestrator::SyncEngine;
pub use reporting::SyncReporter;

/// Synchronization result with statistics
#[derive(Debug, Clone, Default)]
pub struct SyncResult {
    /// Files copied (or, in a dry run, to be copied) into a missing destination
    pub created: usize,
    /// Files copied (or to be copied) over an older destination
    pub updated: usize,
    /// Files left alone
    pub skipped: usize,
    /// Destination entries reported by the purge scan
    pub purge_candidates: usize,
    /// Per-file errors encountered
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Files copied or scheduled for copying
    #[must_use]
    pub const fn total_copies(&self) -> usize {
        self.created + self.updated
    }

    /// Whether sync was successful (no errors)
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
