//! Source/destination file comparison
//!
//! A pair of paths is classified into one of nine [`Outcome`]s using only
//! existence, file type, modification time and size. No content is read.

use std::cmp::Ordering;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use filetime::FileTime;
use tracing::error;

/// Classification of a source/destination pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A stat call failed for a reason other than absence
    Error,
    /// The source path does not exist
    SrcNotFound,
    /// The source exists but is not a regular file
    SrcNotAFile,
    /// The destination does not exist
    DstNotFound,
    /// The destination exists but is not a regular file
    DstNotAFile,
    /// Both files carry the same modification time
    SameAge,
    /// The destination was modified after the source
    DstNewer,
    /// The source is newer and strictly larger
    SrcNewerAndLarger,
    /// The source is newer and not larger
    SrcNewer,
}

impl Outcome {
    /// Every outcome, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Error,
        Self::SrcNotFound,
        Self::SrcNotAFile,
        Self::DstNotFound,
        Self::DstNotAFile,
        Self::SameAge,
        Self::DstNewer,
        Self::SrcNewerAndLarger,
        Self::SrcNewer,
    ];
}

/// The parts of a stat result that drive classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Whether the entry is a regular file
    pub is_file: bool,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: FileTime,
}

impl FileStat {
    /// Extract the relevant fields from `metadata`
    #[must_use]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            is_file: metadata.is_file(),
            size: metadata.len(),
            modified: FileTime::from_last_modification_time(metadata),
        }
    }

    /// Compare modification times at whole-second resolution
    #[must_use]
    pub fn age_cmp(&self, other: &Self) -> Ordering {
        self.modified.unix_seconds().cmp(&other.modified.unix_seconds())
    }
}

/// Result of stat-ing one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Nothing exists at the path
    Missing,
    /// The stat call failed; a diagnostic has been emitted
    Failed,
    /// The entry exists
    Present(FileStat),
}

impl Probe {
    /// Stat `path`, following symlinks
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(metadata) => Self::Present(FileStat::from_metadata(&metadata)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::Missing,
            Err(e) => {
                error!(path = %path.display(), error = %e, "stat failed");
                Self::Failed
            }
        }
    }
}

/// Outcome of a comparison plus the source metadata the copier needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Classification of the pair
    pub outcome: Outcome,
    /// Source size and mtime, captured whenever the source is a regular file
    pub source: Option<FileStat>,
}

impl Comparison {
    const fn without_source(outcome: Outcome) -> Self {
        Self {
            outcome,
            source: None,
        }
    }
}

/// Classify a pair from its stat results
///
/// `dst` is only consulted once the source is known to be a regular file.
pub fn classify(src: Probe, dst: impl FnOnce() -> Probe) -> Comparison {
    let src = match src {
        Probe::Missing => return Comparison::without_source(Outcome::SrcNotFound),
        Probe::Failed => return Comparison::without_source(Outcome::Error),
        Probe::Present(stat) if !stat.is_file => {
            return Comparison::without_source(Outcome::SrcNotAFile);
        }
        Probe::Present(stat) => stat,
    };

    let outcome = match dst() {
        Probe::Missing => Outcome::DstNotFound,
        Probe::Failed => Outcome::Error,
        Probe::Present(dst) if !dst.is_file => Outcome::DstNotAFile,
        Probe::Present(dst) => match src.age_cmp(&dst) {
            Ordering::Equal => Outcome::SameAge,
            Ordering::Less => Outcome::DstNewer,
            Ordering::Greater if src.size > dst.size => Outcome::SrcNewerAndLarger,
            Ordering::Greater => Outcome::SrcNewer,
        },
    };

    Comparison {
        outcome,
        source: Some(src),
    }
}

/// Compares a source file with its destination counterpart
pub struct FileComparator;

impl FileComparator {
    /// Stat both paths and classify the pair
    #[must_use]
    pub fn compare(source: &Path, destination: &Path) -> Comparison {
        classify(Probe::of(source), || Probe::of(destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;

    use filetime::set_file_mtime;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn stat(is_file: bool, size: u64, secs: i64) -> FileStat {
        FileStat {
            is_file,
            size,
            modified: FileTime::from_unix_time(secs, 0),
        }
    }

    fn write_with_mtime(path: &Path, content: &[u8], secs: i64) {
        fs::write(path, content).unwrap();
        set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
    }

    fn probe_strategy() -> impl Strategy<Value = Probe> {
        prop_oneof![
            Just(Probe::Missing),
            Just(Probe::Failed),
            (any::<bool>(), 0u64..4, 0i64..4)
                .prop_map(|(is_file, size, secs)| Probe::Present(stat(is_file, size, secs))),
        ]
    }

    /// Decision order written out as a flat list of guards
    fn expected(src: Probe, dst: Probe) -> Outcome {
        let Probe::Present(s) = src else {
            return if src == Probe::Missing {
                Outcome::SrcNotFound
            } else {
                Outcome::Error
            };
        };
        if !s.is_file {
            return Outcome::SrcNotAFile;
        }
        let Probe::Present(d) = dst else {
            return if dst == Probe::Missing {
                Outcome::DstNotFound
            } else {
                Outcome::Error
            };
        };
        if !d.is_file {
            return Outcome::DstNotAFile;
        }
        let (st, dt) = (s.modified.unix_seconds(), d.modified.unix_seconds());
        if st == dt {
            Outcome::SameAge
        } else if st < dt {
            Outcome::DstNewer
        } else if s.size > d.size {
            Outcome::SrcNewerAndLarger
        } else {
            Outcome::SrcNewer
        }
    }

    proptest! {
        #[test]
        fn classify_follows_decision_order(src in probe_strategy(), dst in probe_strategy()) {
            let consulted = Cell::new(false);
            let comparison = classify(src, || {
                consulted.set(true);
                dst
            });

            prop_assert_eq!(comparison.outcome, expected(src, dst));

            let src_is_file = matches!(src, Probe::Present(s) if s.is_file);
            prop_assert_eq!(consulted.get(), src_is_file);
            prop_assert_eq!(comparison.source.is_some(), src_is_file);
        }
    }

    #[test]
    fn test_sub_second_difference_is_same_age() {
        let src = FileStat {
            modified: FileTime::from_unix_time(100, 900_000_000),
            ..stat(true, 10, 0)
        };
        let dst = FileStat {
            modified: FileTime::from_unix_time(100, 0),
            ..stat(true, 5, 0)
        };

        let comparison = classify(Probe::Present(src), || Probe::Present(dst));
        assert_eq!(comparison.outcome, Outcome::SameAge);
    }

    #[test]
    fn test_compare_source_missing() {
        let tmp = TempDir::new().unwrap();
        let comparison =
            FileComparator::compare(&tmp.path().join("src.txt"), &tmp.path().join("dst.txt"));

        assert_eq!(comparison.outcome, Outcome::SrcNotFound);
        assert!(comparison.source.is_none());
    }

    #[test]
    fn test_compare_source_is_directory() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src");
        fs::create_dir(&source).unwrap();

        let comparison = FileComparator::compare(&source, &tmp.path().join("dst"));
        assert_eq!(comparison.outcome, Outcome::SrcNotAFile);
    }

    #[test]
    fn test_compare_destination_missing() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("report.csv");
        write_with_mtime(&source, &[b'x'; 100], 1_000);

        let comparison = FileComparator::compare(&source, &tmp.path().join("out/report.csv"));
        assert_eq!(comparison.outcome, Outcome::DstNotFound);

        let captured = comparison.source.unwrap();
        assert_eq!(captured.size, 100);
        assert_eq!(captured.modified.unix_seconds(), 1_000);
    }

    #[test]
    fn test_compare_destination_is_directory() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b");
        write_with_mtime(&source, b"a", 1_000);
        fs::create_dir(&dest).unwrap();

        let comparison = FileComparator::compare(&source, &dest);
        assert_eq!(comparison.outcome, Outcome::DstNotAFile);
    }

    #[test]
    fn test_compare_same_age() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        write_with_mtime(&source, b"longer content", 5_000);
        write_with_mtime(&dest, b"short", 5_000);

        let comparison = FileComparator::compare(&source, &dest);
        assert_eq!(comparison.outcome, Outcome::SameAge);
    }

    #[test]
    fn test_compare_destination_newer() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        write_with_mtime(&source, b"content", 5_000);
        write_with_mtime(&dest, b"content", 6_000);

        let comparison = FileComparator::compare(&source, &dest);
        assert_eq!(comparison.outcome, Outcome::DstNewer);
    }

    #[test]
    fn test_compare_source_newer_and_larger() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        write_with_mtime(&source, &[b'n'; 120], 2_000);
        write_with_mtime(&dest, &[b'o'; 100], 1_000);

        let comparison = FileComparator::compare(&source, &dest);
        assert_eq!(comparison.outcome, Outcome::SrcNewerAndLarger);
    }

    #[test]
    fn test_compare_source_newer_not_larger() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.txt");
        let dest = tmp.path().join("b.txt");
        write_with_mtime(&source, &[b'n'; 100], 2_000);
        write_with_mtime(&dest, &[b'o'; 100], 1_000);

        let comparison = FileComparator::compare(&source, &dest);
        assert_eq!(comparison.outcome, Outcome::SrcNewer);
    }

    #[cfg(unix)]
    #[test]
    fn test_compare_stat_failure_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        // A regular file used as a directory fails with ENOTDIR, not ENOENT
        let comparison = FileComparator::compare(&file.join("child"), &tmp.path().join("dst"));
        assert_eq!(comparison.outcome, Outcome::Error);
    }
}
