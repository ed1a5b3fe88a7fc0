use std::collections::HashSet;

/// Classification of a filesystem entry as seen by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Pure inclusion predicate over the ignore sets and the extension allow-list.
///
/// Matching is exact and case-sensitive. Rules are applied in order and the
/// first match wins:
///
/// 1. directory named in `ignore_directories` is excluded, subtree included;
/// 2. file named in `ignore_files` is excluded;
/// 3. file whose extension is in `ignore_extensions` is excluded;
/// 4. with a non-empty `allow_extensions`, a file whose extension is not
///    listed is excluded;
/// 5. everything else is included.
#[derive(Debug, Clone, Copy)]
pub struct FilterPolicy<'a> {
    pub ignore_directories: &'a HashSet<String>,
    pub ignore_files: &'a HashSet<String>,
    pub ignore_extensions: &'a HashSet<String>,
    pub allow_extensions: &'a HashSet<String>,
}

impl FilterPolicy<'_> {
    /// Decide whether an entry belongs in the tree.
    ///
    /// `extension` is the empty string when the entry has none. Directories
    /// are never subject to the extension rules.
    pub fn accepts(&self, kind: EntryKind, name: &str, extension: &str) -> bool {
        match kind {
            EntryKind::Directory => !self.ignore_directories.contains(name),
            EntryKind::File => {
                if self.ignore_files.contains(name) {
                    return false;
                }
                if self.ignore_extensions.contains(extension) {
                    return false;
                }
                self.allow_extensions.is_empty() || self.allow_extensions.contains(extension)
            }
        }
    }
}
