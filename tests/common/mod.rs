#![allow(dead_code)]

use dirtree::{Directory, Node};
use std::fs;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Names of the immediate contents, sorted, directories suffixed with '/'.
pub fn child_names(dir: &Directory) -> Vec<String> {
    let mut names: Vec<String> = dir
        .contents()
        .iter()
        .map(|node| match node {
            Node::Directory(d) => format!("{}/", d.name()),
            Node::File(f) => f.name(false).to_string(),
        })
        .collect();
    names.sort();
    names
}

/// Every path in the tree relative to the root, sorted.
pub fn all_relative_paths(root: &Directory) -> Vec<String> {
    fn walk(dir: &Directory, root: &Directory, out: &mut Vec<String>) {
        for node in dir.contents() {
            let rel = node
                .path()
                .strip_prefix(root.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            match node {
                Node::Directory(d) => {
                    out.push(format!("{rel}/"));
                    walk(d, root, out);
                }
                Node::File(_) => out.push(rel),
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Opt-in log output: `RUST_LOG=dirtree=trace cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_test_writer()
        .try_init();
}
