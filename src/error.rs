use std::io;
use std::path::{Path, PathBuf};

/// Result type alias using the library [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while synchronizing files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation on `path` failed
    #[error("{operation} failed for {}: {source}", .path.display())]
    Io {
        /// What was being attempted (`stat`, `read`, `write`, ...)
        operation: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A composed path does not fit in the path buffer
    #[error("path too long ({length} bytes, maximum is {max})")]
    PathTooLong {
        /// Length of the path that was rejected
        length: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Fewer bytes were read than the file size reported by `stat`
    #[error("short read from {}: expected {expected} bytes, got {actual}", .path.display())]
    ShortRead {
        /// File being read
        path: PathBuf,
        /// Size reported when the file was compared
        expected: u64,
        /// Bytes actually read
        actual: u64,
    },

    /// The file does not fit in memory on this platform
    #[error("{} is too large to copy ({size} bytes)", .path.display())]
    FileTooLarge {
        /// File being read
        path: PathBuf,
        /// Reported size
        size: u64,
    },

    /// The status report could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    /// The destination modification time could not be set
    #[error("failed to set modification time of {}: {source}", .path.display())]
    Timestamp {
        /// Destination file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an [`io::Error`] raised by `operation` on `path`
    pub fn io(operation: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error only means the file is not there
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
