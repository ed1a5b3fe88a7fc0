use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use super::filter::EntryKind;
use super::walk::build_tree;
use super::ScanOptions;
use crate::error::{Error, Result};

/// A node of the scanned tree: exactly one of a directory or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    /// Base name of the entry (with extension, for files).
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => dir.name(),
            Node::File(file) => file.name(false),
        }
    }

    /// Full filesystem path of the entry.
    pub fn path(&self) -> &Path {
        match self {
            Node::Directory(dir) => dir.path(),
            Node::File(file) => file.path(),
        }
    }

    /// The directory this entry lives in.
    pub fn parent_path(&self) -> &Path {
        match self {
            Node::Directory(dir) => dir.parent_path(),
            Node::File(file) => file.parent_path(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Node::Directory(_) => EntryKind::Directory,
            Node::File(_) => EntryKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

/// A directory and everything beneath it that survived filtering.
///
/// Contents keep the order in which the filesystem reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
    name: String,
    contents: Vec<Node>,
}

impl Directory {
    /// Scan `path` into a tree. Same as [`crate::scan`].
    pub fn open(path: impl AsRef<Path>, options: &ScanOptions) -> Result<Self> {
        build_tree(path.as_ref(), options).map(|(root, _)| root)
    }

    /// An empty directory node; children are attached by the tree builder.
    pub(crate) fn empty(path: PathBuf) -> Self {
        let name = base_name(&path);
        Self {
            path,
            name,
            contents: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.contents.push(node);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path, including this directory's own name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The location this directory lives in, without its own name.
    pub fn parent_path(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    pub fn contents(&self) -> &[Node] {
        &self.contents
    }

    /// Immediate subdirectories, in contents order.
    pub fn directories(&self) -> impl Iterator<Item = &Directory> + '_ {
        self.contents.iter().filter_map(Node::as_directory)
    }

    /// Immediate files, in contents order.
    pub fn files(&self) -> impl Iterator<Item = &File> + '_ {
        self.contents.iter().filter_map(Node::as_file)
    }

    pub fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    pub fn has_directories(&self) -> bool {
        self.contents.iter().any(Node::is_directory)
    }

    pub fn has_files(&self) -> bool {
        self.contents.iter().any(Node::is_file)
    }

    /// Number of files directly in this directory, or in the whole subtree
    /// when `recursive` is set.
    pub fn count_files(&self, recursive: bool) -> usize {
        self.contents
            .iter()
            .map(|node| match node {
                Node::File(_) => 1,
                Node::Directory(dir) if recursive => dir.count_files(true),
                Node::Directory(_) => 0,
            })
            .sum()
    }

    /// Number of subdirectories. Every immediate subdirectory counts; with
    /// `recursive`, each one also contributes its own recursive count.
    /// The directory itself is never counted.
    pub fn count_directories(&self, recursive: bool) -> usize {
        self.directories()
            .map(|dir| {
                if recursive {
                    1 + dir.count_directories(true)
                } else {
                    1
                }
            })
            .sum()
    }

    /// A copy of this tree with every level in canonical order:
    /// directories first, then case-insensitive by name, dotfiles last.
    pub fn sorted(&self) -> Directory {
        let mut contents: Vec<Node> = self
            .contents
            .iter()
            .map(|node| match node {
                Node::Directory(dir) => Node::Directory(dir.sorted()),
                Node::File(file) => Node::File(file.clone()),
            })
            .collect();
        contents.sort_by(sort_cmp);
        Directory {
            path: self.path.clone(),
            name: self.name.clone(),
            contents,
        }
    }
}

/// A regular file. Never has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    name: String,
    stem: String,
    extension: String,
}

impl File {
    /// Describe an existing regular file.
    ///
    /// Fails with [`Error::NotAFile`] when `path` is missing or is not a
    /// regular file (directories included).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::from_path(path.to_path_buf()))
    }

    /// Build the descriptor from a path already known to be a file.
    pub(crate) fn from_path(path: PathBuf) -> Self {
        let name = base_name(&path);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let extension = extension_of(&path);
        Self {
            path,
            name,
            stem,
            extension,
        }
    }

    /// The file name, optionally without its extension.
    pub fn name(&self, strip_extension: bool) -> &str {
        if strip_extension {
            &self.stem
        } else {
            &self.name
        }
    }

    /// Extension without the leading dot; empty when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Full path, including the file name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory containing this file.
    pub fn parent_path(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }
}

pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Directories first, then case-insensitive alpha, dotfiles last.
fn sort_cmp(a: &Node, b: &Node) -> Ordering {
    let a_is_dir = a.is_directory();
    let b_is_dir = b.is_directory();

    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_dot = a.name().starts_with('.');
    let b_dot = b.name().starts_with('.');

    if a_dot != b_dot {
        return if a_dot {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
}
