//! Per-directory listing used by the tree builder.
//!
//! Each visited directory is listed exactly once. Its children are classified
//! and ignored names are dropped here, so a pruned directory is never opened.

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, TreeError};

use super::config::{SortOrder, TreeConfig};

/// One visited directory and its retained children. Lives only for the walk.
#[derive(Debug)]
pub struct TraversalNode {
    pub path: PathBuf,
    pub depth: usize,
    /// Retained subdirectories, in listing order
    pub dirs: Vec<PathBuf>,
    /// Retained file names, in listing order
    pub files: Vec<String>,
}

impl TraversalNode {
    /// List `path` and keep the children that pass the ignore rules.
    pub fn read(path: &Path, depth: usize, config: &TreeConfig) -> Result<Self> {
        let mut entries = fs::read_dir(path)
            .map_err(|e| TreeError::from_io(path, e))?
            .collect::<std::io::Result<Vec<DirEntry>>>()
            .map_err(|e| TreeError::from_io(path, e))?;

        if config.sort == SortOrder::Name {
            entries.sort_by_key(|e| e.file_name());
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let name = entry.file_name();
            let entry_path = entry.path();

            match classify(&entry, &entry_path)? {
                EntryKind::Dir => {
                    if config.ignore.is_ignored_dir(&name) {
                        debug!(path = %entry_path.display(), "pruned ignored directory");
                        continue;
                    }
                    dirs.push(entry_path);
                }
                EntryKind::File => {
                    if config.ignore.is_ignored_file(&name) {
                        trace!(path = %entry_path.display(), "skipped ignored file");
                        continue;
                    }
                    files.push(name.to_string_lossy().into_owned());
                }
                EntryKind::LinkedDir => {
                    trace!(path = %entry_path.display(), "not following directory symlink");
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            depth,
            dirs,
            files,
        })
    }
}

enum EntryKind {
    Dir,
    File,
    /// Symlink whose target is a directory: neither shown nor followed
    LinkedDir,
}

fn classify(entry: &DirEntry, path: &Path) -> Result<EntryKind> {
    let file_type = entry.file_type().map_err(|e| TreeError::from_io(path, e))?;

    if file_type.is_symlink() {
        // Dangling links count as files
        return Ok(match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => EntryKind::LinkedDir,
            _ => EntryKind::File,
        });
    }

    Ok(if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    })
}
