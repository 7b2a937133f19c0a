//! Whole-file copy with modification time propagation

use std::path::Path;

use filetime::{FileTime, set_file_times};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fileio::{read_whole_file, write_whole_file};

/// Copies a source file over its destination
pub struct FileCopier;

impl FileCopier {
    /// Copy `size` bytes from `source` to `dest` and stamp `dest` with `modified`
    ///
    /// The file is held in memory in one buffer. A failed read leaves the
    /// destination untouched.
    ///
    /// # Errors
    ///
    /// Returns an I/O or short-read error if the copy itself fails, or
    /// [`Error::Timestamp`] if the data was written but the modification time
    /// could not be applied. In the latter case the copied file stays in place.
    pub fn copy(source: &Path, dest: &Path, size: u64, modified: FileTime) -> Result<()> {
        let buffer = read_whole_file(source, size)?;
        write_whole_file(dest, &buffer)?;

        set_file_times(dest, FileTime::now(), modified).map_err(|e| Error::Timestamp {
            path: dest.to_path_buf(),
            source: e,
        })?;

        debug!(
            source = %source.display(),
            dest = %dest.display(),
            bytes = size,
            "copied"
        );
        Ok(())
    }
}
