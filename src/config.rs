/// Flags fixed for the lifetime of one synchronization run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SyncConfig {
    /// Print a status line for every file, not just copied ones
    pub verbose: bool,

    /// Report copy decisions without copying anything
    pub dry_run: bool,

    /// Report destination files with no counterpart in the source tree
    pub purge: bool,
}

impl SyncConfig {
    /// Create a configuration from the three run flags
    #[must_use]
    pub const fn new(verbose: bool, dry_run: bool, purge: bool) -> Self {
        Self {
            verbose,
            dry_run,
            purge,
        }
    }
}
