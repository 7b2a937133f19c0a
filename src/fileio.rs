//! Whole-buffer file read and write

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Read exactly `expected_size` bytes from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if it holds
/// fewer than `expected_size` bytes.
pub fn read_whole_file(path: &Path, expected_size: u64) -> Result<Vec<u8>> {
    let capacity = usize::try_from(expected_size).map_err(|_| Error::FileTooLarge {
        path: path.to_path_buf(),
        size: expected_size,
    })?;

    let file = File::open(path).map_err(|e| Error::io("open", path, e))?;
    let mut buffer = Vec::with_capacity(capacity);
    file.take(expected_size)
        .read_to_end(&mut buffer)
        .map_err(|e| Error::io("read", path, e))?;

    if buffer.len() != capacity {
        return Err(Error::ShortRead {
            path: path.to_path_buf(),
            expected: expected_size,
            actual: buffer.len() as u64,
        });
    }

    Ok(buffer)
}

/// Write `bytes` to `path`, creating missing parent directories first
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// cannot be written in full.
pub fn write_whole_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io("mkdir", parent, e))?;
    }

    let mut file = File::create(path).map_err(|e| Error::io("open", path, e))?;
    file.write_all(bytes)
        .map_err(|e| Error::io("write", path, e))?;
    file.flush().map_err(|e| Error::io("write", path, e))?;

    Ok(())
}
