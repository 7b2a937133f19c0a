//! # plunge
//!
//! Core library for one-way file synchronization.
//!
//! Given a source directory, a destination directory and an explicit list of
//! relative paths, each source file is copied into the destination when it is
//! newer, skipped otherwise, and destination entries without a source
//! counterpart can be reported as purge candidates.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for the plunge library
pub mod error;

/// Run configuration (verbose, dry-run, purge)
pub mod config;

/// Path composition and display formatting
pub mod path;

/// Reading the list of relative paths to synchronize
pub mod input;

/// Whole-buffer file read and write primitives
pub mod fileio;

/// Source/destination file comparison
pub mod comparison;

/// Destination tree scanning for purge candidates
pub mod scanner;

/// One-way synchronization engine
pub mod sync;

pub use comparison::{Comparison, FileComparator, Outcome};
pub use config::SyncConfig;
pub use scanner::{PurgeCandidate, PurgeScanner, SkipList};
pub use sync::{SyncEngine, SyncResult};
