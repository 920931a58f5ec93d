//! One-level directory listing.
//!
//! Both the root and each book directory are read one level deep only.
//! Entries come back sorted by file name so runs are reproducible.

use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{LabelCatError, Result};

/// Immediate children of `dir`, sorted by name.
///
/// An unreadable `dir` is an error; an unreadable child entry is logged and
/// left out.
pub fn list_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => children.push(entry.into_path()),
            Err(err) if err.depth() == 0 => {
                return Err(LabelCatError::from(io::Error::from(err)));
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
            }
        }
    }

    Ok(children)
}

/// Immediate subdirectories of `root`. Symbolic links to directories count.
pub fn subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_children(root)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

/// Regular files directly inside `dir`, sorted by name.
pub fn files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_children(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}
