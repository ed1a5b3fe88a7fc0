use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use super::filter::{EntryKind, FilterPolicy};
use super::node::{extension_of, Directory, File, Node};
use super::ScanOptions;
use crate::error::{Error, Result};

/// Build the tree rooted at `root`.
///
/// Traversal is a single depth-first walk. Entries rejected by the filter are
/// pruned in `filter_entry`, so ignored directories are never descended into.
/// Entries that cannot be read are logged, collected, and skipped.
pub(crate) fn build_tree(root: &Path, options: &ScanOptions) -> Result<(Directory, Vec<Error>)> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    let root = absolute_root(root)?;
    debug!(root = %root.display(), "scanning directory tree");

    let policy = options.policy();
    let walker = WalkDir::new(&root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || admits(&policy, entry));

    // Directories still being filled, root at the bottom. Its length is
    // always one more than the depth of the entry on top.
    let mut open: Vec<Directory> = vec![Directory::empty(root.clone())];
    let mut skipped = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let err = Error::unreadable(&e, &root);
                warn!("skipping {err}");
                skipped.push(err);
                continue;
            }
        };

        let depth = entry.depth();
        if depth == 0 {
            continue;
        }

        close_to_depth(&mut open, depth);

        let kind = classify(&entry);
        let path = entry.into_path();
        match kind {
            Some(EntryKind::Directory) => open.push(Directory::empty(path)),
            Some(EntryKind::File) => {
                if let Some(parent) = open.last_mut() {
                    parent.push(Node::File(File::from_path(path)));
                }
            }
            None => {}
        }
    }

    close_to_depth(&mut open, 1);
    let tree = open.pop().unwrap_or_else(|| Directory::empty(root.clone()));

    debug!(
        root = %root.display(),
        directories = tree.count_directories(true),
        files = tree.count_files(true),
        skipped = skipped.len(),
        "scan complete"
    );
    Ok((tree, skipped))
}

/// Pop finished directories until the top of the stack is the parent of an
/// entry at `depth`, attaching each one to the directory below it.
fn close_to_depth(open: &mut Vec<Directory>, depth: usize) {
    while open.len() > depth {
        let Some(done) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.push(Node::Directory(done)),
            None => {
                open.push(done);
                break;
            }
        }
    }
}

/// Apply the filter policy to a raw walk entry.
fn admits(policy: &FilterPolicy<'_>, entry: &DirEntry) -> bool {
    let Some(kind) = classify(entry) else {
        trace!(path = %entry.path().display(), "skipping entry that is neither file nor directory");
        return false;
    };
    let name = entry.file_name().to_string_lossy();
    let extension = match kind {
        EntryKind::File => extension_of(entry.path()),
        EntryKind::Directory => String::new(),
    };
    let keep = policy.accepts(kind, &name, &extension);
    if !keep {
        trace!(path = %entry.path().display(), ?kind, "filtered out");
    }
    keep
}

fn classify(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        Some(EntryKind::Directory)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

/// Make `root` absolute and fold `.` and `..` so the root node gets its real
/// name and parent. Folding is lexical; symlinks in the path are not resolved.
fn absolute_root(root: &Path) -> Result<PathBuf> {
    let joined = if root.is_absolute() {
        root.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::io(root, e))?;
        cwd.join(root)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` refuses to go above the root, so `/..` stays `/`.
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
