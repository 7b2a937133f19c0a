//! Reads the relative paths to synchronize, one per line

use std::io::BufRead;
use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::error::{Error, Result};

/// Read relative paths from `reader`
///
/// Lines are taken as raw bytes, so names that are not valid UTF-8 pass
/// through unchanged on unix. Surrounding ASCII whitespace is trimmed, blank
/// lines are skipped and forward slashes are rewritten to the platform
/// separator.
///
/// # Errors
///
/// Returns an error if the stream cannot be read.
pub fn read_relative_paths<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for line in reader.split(b'\n') {
        let line = line.map_err(|e| Error::io("read", "<stdin>", e))?;
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }
        let mut bytes = trimmed.to_vec();
        normalize_separators(&mut bytes);
        paths.push(path_from_bytes(bytes));
    }

    Ok(paths)
}

fn normalize_separators(bytes: &mut [u8]) {
    if MAIN_SEPARATOR != '/' {
        for b in bytes.iter_mut().filter(|b| **b == b'/') {
            *b = MAIN_SEPARATOR as u8;
        }
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

// Windows paths are UTF-16; undecodable bytes become U+FFFD
#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
