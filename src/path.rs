//! Path composition and fixed-width display formatting
//!
//! Paths are joined by plain concatenation so that a relative path always
//! lands under its base directory, even when it starts with a separator.

use std::ffi::{OsStr, OsString};
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::error::{Error, Result};

/// Width of one line of tabular output
pub const MAX_LINE_LENGTH: usize = 78;

/// Upper bound on the length of a composed path
pub const MAX_PATH_LENGTH: usize = 4096;

/// Platform directory separator
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// Dots substituted for the elided middle of a long path
const ELLIPSIS: usize = 3;

/// Characters of the head that always survive shortening
const MIN_HEAD: usize = 6;

/// Join `dir` and `rel`, inserting exactly one separator if `dir` lacks a trailing one
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if the result would not fit in
/// [`MAX_PATH_LENGTH`].
pub fn build_absolute(dir: &Path, rel: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_os_str();
    let rel = rel.as_ref().as_os_str();

    let mut abs = OsString::with_capacity(dir.len() + 1 + rel.len());
    abs.push(dir);
    if !dir.is_empty() && !ends_with_separator(dir) {
        abs.push(MAIN_SEPARATOR_STR);
    }
    abs.push(rel);

    if abs.len() >= MAX_PATH_LENGTH {
        return Err(Error::PathTooLong {
            length: abs.len(),
            max: MAX_PATH_LENGTH - 1,
        });
    }

    Ok(PathBuf::from(abs))
}

pub(crate) fn ends_with_separator(path: &OsStr) -> bool {
    path.as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(char::from(b)))
}

/// Lay out `path` in a field of `width` characters
///
/// Fields narrower than [`MAX_LINE_LENGTH`] reserve three columns and are
/// right-padded with alternating spaces and dots so a status label can follow.
/// Full-width fields are newline terminated instead. A path that does not fit
/// keeps its head and its final segment, with the middle replaced by `...`.
#[must_use]
pub fn format_path(path: &str, width: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    let len = chars.len();
    let field = if width < MAX_LINE_LENGTH {
        width.saturating_sub(ELLIPSIS)
    } else {
        width
    };

    let mut out = String::with_capacity(width + 1);
    let mut written = len;

    if len <= field {
        out.push_str(path);
    } else if field < MIN_HEAD {
        out.extend(&chars[..field]);
        written = field;
    } else {
        let last_sep = (MIN_HEAD + 1..len)
            .rev()
            .find(|&i| chars[i] == SEPARATOR)
            .unwrap_or(MIN_HEAD);
        let tail = last_sep.max(len + MIN_HEAD - field);
        let head = field - (len - tail);

        out.extend(&chars[..head - ELLIPSIS]);
        out.extend(std::iter::repeat_n('.', ELLIPSIS));
        out.extend(&chars[tail..]);
        written = field;
    }

    if field < width {
        for n in written..width {
            out.push(if (width - n) % 2 == 1 { ' ' } else { '.' });
        }
    } else {
        out.push('\n');
    }

    out
}
