#![forbid(unsafe_code)]
//! dirtree — an in-memory, filtered model of a directory subtree.
//!
//! [`scan`] walks a root directory depth-first and returns an immutable
//! [`Directory`] tree of [`Directory`] and [`File`] nodes. Which entries make
//! it into the tree is decided by [`ScanOptions`]. The [`fs_ops`] module holds
//! the mutating helpers (create, remove, copy, rename).

pub mod cli;
pub mod error;
pub mod fs_ops;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{scan, scan_with_skipped, Directory, File, Node, ScanOptions, ScanOutcome};
