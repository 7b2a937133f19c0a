//! Fixed decision table from comparison outcome to sync action

use crate::comparison::Outcome;

/// What to do with one file, and what to say about it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncAction {
    /// Whether the source replaces the destination
    pub copy: bool,
    /// Status shown in verbose mode
    pub verbose: &'static str,
    /// Status shown in terse mode, `None` when terse mode stays silent
    pub terse: Option<&'static str>,
}

impl SyncAction {
    /// Status line for the given verbosity, if any
    #[must_use]
    pub const fn message(&self, verbose: bool) -> Option<&'static str> {
        if verbose { Some(self.verbose) } else { self.terse }
    }
}

const fn skip(verbose: &'static str) -> SyncAction {
    SyncAction {
        copy: false,
        verbose,
        terse: None,
    }
}

const fn copy(verbose: &'static str, terse: &'static str) -> SyncAction {
    SyncAction {
        copy: true,
        verbose,
        terse: Some(terse),
    }
}

/// Indexed by `Outcome as usize`
const TABLE: [SyncAction; 9] = [
    skip("Error"),
    skip("Src not found. . . . Skip"),
    skip("Src not a file . . . Skip"),
    copy("Dst not found. . . . Copy", "New"),
    skip("Dst not a file . . . Skip"),
    skip("Same age . . . . . . Skip"),
    skip("Dst newer! . . . . . Skip"),
    copy("Src newer & larger . Copy", "Newer and larger"),
    copy("Src newer. . . . . . Copy", "Newer (not larger)"),
];

/// Look up the action for `outcome`
#[must_use]
pub const fn resolve(outcome: Outcome) -> SyncAction {
    TABLE[outcome as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_decisions() {
        let copied: Vec<Outcome> = Outcome::ALL
            .into_iter()
            .filter(|o| resolve(*o).copy)
            .collect();

        assert_eq!(
            copied,
            vec![
                Outcome::DstNotFound,
                Outcome::SrcNewerAndLarger,
                Outcome::SrcNewer
            ]
        );
    }

    #[test]
    fn test_terse_messages_only_for_copies() {
        for outcome in Outcome::ALL {
            let action = resolve(outcome);
            assert_eq!(action.terse.is_some(), action.copy, "{outcome:?}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(resolve(Outcome::Error).verbose, "Error");
        assert_eq!(resolve(Outcome::DstNotFound).terse, Some("New"));
        assert_eq!(
            resolve(Outcome::SrcNewerAndLarger).terse,
            Some("Newer and larger")
        );
        assert_eq!(resolve(Outcome::SrcNewer).terse, Some("Newer (not larger)"));
        assert_eq!(
            resolve(Outcome::DstNewer).verbose,
            "Dst newer! . . . . . Skip"
        );
        assert_eq!(
            resolve(Outcome::SameAge).verbose,
            "Same age . . . . . . Skip"
        );
    }

    #[test]
    fn test_verbose_labels_align() {
        for outcome in Outcome::ALL.into_iter().skip(1) {
            assert_eq!(resolve(outcome).verbose.len(), 25, "{outcome:?}");
        }
    }

    #[test]
    fn test_message_selection() {
        let action = resolve(Outcome::SameAge);
        assert_eq!(action.message(true), Some("Same age . . . . . . Skip"));
        assert_eq!(action.message(false), None);

        let action = resolve(Outcome::DstNotFound);
        assert_eq!(action.message(false), Some("New"));
    }
}
