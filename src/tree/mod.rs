//! Directory scanning, filtering, and the resulting tree model.

mod filter;
pub(crate) mod layout;
mod node;
mod walk;

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

pub use filter::{EntryKind, FilterPolicy};
pub use layout::{flatten, TreeLine};
pub use node::{Directory, File, Node};

/// Configuration for a single scan.
///
/// All sets hold exact, case-sensitive names. Extensions are given without
/// the leading dot. An empty `allow_extensions` admits every extension.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Directory names to exclude together with their whole subtree.
    pub ignore_directories: HashSet<String>,
    /// File names (including extension) to exclude.
    pub ignore_files: HashSet<String>,
    /// File extensions to exclude.
    pub ignore_extensions: HashSet<String>,
    /// When non-empty, only files with one of these extensions are kept.
    pub allow_extensions: HashSet<String>,
    /// Whether to follow symbolic links during traversal.
    pub follow_symlinks: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_directories<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_directories.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignore_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_files.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignore_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_extensions
            .extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn allow_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_extensions
            .extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// The filter predicate for these options.
    pub fn policy(&self) -> FilterPolicy<'_> {
        FilterPolicy {
            ignore_directories: &self.ignore_directories,
            ignore_files: &self.ignore_files,
            ignore_extensions: &self.ignore_extensions,
            allow_extensions: &self.allow_extensions,
        }
    }
}

/// A finished scan together with the entries that had to be skipped.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The tree rooted at the scanned directory.
    pub root: Directory,
    /// One [`Error::EntryUnreadable`] per entry that could not be read.
    pub skipped: Vec<Error>,
}

/// Scan `root` into a [`Directory`] tree.
///
/// Fails with [`Error::NotADirectory`] if `root` is missing or not a
/// directory. Unreadable entries below the root are skipped; use
/// [`scan_with_skipped`] to find out which.
pub fn scan(root: impl AsRef<Path>, options: &ScanOptions) -> Result<Directory> {
    Directory::open(root, options)
}

/// Like [`scan`], but also reports every entry that was skipped because it
/// could not be read.
pub fn scan_with_skipped(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanOutcome> {
    let (root, skipped) = walk::build_tree(root.as_ref(), options)?;
    Ok(ScanOutcome { root, skipped })
}
