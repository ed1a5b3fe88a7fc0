//! Filesystem mutation helpers: create, remove, copy, rename.
//!
//! These delegate to `std::fs` and attach the offending path to any failure.

use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Create a directory and any missing parents. Existing paths are left alone.
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Remove a file, or a directory with everything in it.
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "removing");
    let meta = fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))
    }
}

/// Copy a file or a whole directory to `destination`.
///
/// Missing destination directories are created. Files that already exist at
/// the destination are overwritten.
pub fn copy(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    debug!(from = %source.display(), to = %destination.display(), "copying");

    if source.is_dir() {
        return copy_directory(source, destination);
    }
    if let Some(parent) = destination.parent() {
        create_directory(parent)?;
    }
    fs::copy(source, destination).map_err(|e| Error::io(source, e))?;
    Ok(())
}

/// Rename or move a file or directory.
pub fn rename(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    debug!(from = %source.display(), to = %destination.display(), "renaming");
    fs::rename(source, destination).map_err(|e| Error::io(source, e))
}

fn copy_directory(source: &Path, destination: &Path) -> Result<()> {
    // Collect first so a destination nested inside the source is not walked
    // while it is being written.
    let entries = WalkDir::new(source)
        .into_iter()
        .collect::<std::result::Result<Vec<walkdir::DirEntry>, walkdir::Error>>()
        .map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            Error::io(&path, e.into())
        })?;

    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        let target = destination.join(relative);
        if entry.file_type().is_dir() {
            create_directory(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_directory(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        }
    }
    Ok(())
}
