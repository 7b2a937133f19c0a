//! Source paths known to exist, used to avoid stat calls while purging

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::path::{build_absolute, ends_with_separator};

/// Absolute source-side paths of every synchronized file, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    paths: Vec<PathBuf>,
}

impl SkipList {
    /// Build the list by joining each relative path onto `source_root`
    ///
    /// # Errors
    ///
    /// Returns an error if a composed path exceeds the path length limit.
    pub fn build<P: AsRef<Path>>(source_root: &Path, rel_paths: &[P]) -> Result<Self> {
        let paths = rel_paths
            .iter()
            .map(|rel| build_absolute(source_root, rel))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths })
    }

    /// Whether `file` is listed exactly
    #[must_use]
    pub fn contains_file(&self, file: &Path) -> bool {
        self.paths.iter().any(|p| p == file)
    }

    /// Whether some listed path lies under `dir`
    ///
    /// Matching is per path component, so `foo2` is never taken for an
    /// ancestor of `foo/x`. A listed path naming `dir` itself only counts
    /// when it ends in a separator (`assets/`).
    #[must_use]
    pub fn contains_descendant_of(&self, dir: &Path) -> bool {
        self.paths
            .iter()
            .any(|p| p.starts_with(dir) && (p != dir || ends_with_separator(p.as_os_str())))
    }
}
