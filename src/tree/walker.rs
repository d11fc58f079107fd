//! TreeBuilder - pre-order walk producing one line per retained entry

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TreeError};
use crate::output::render_lines;

use super::config::TreeConfig;
use super::filter::IgnoreSpec;
use super::traversal::TraversalNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Dir,
    File,
}

/// A single rendered tree entry.
///
/// `depth` is the number of indentation units in front of the name. A directory's
/// depth is its distance from the root; a file sits one unit deeper than its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub kind: LineKind,
    pub depth: usize,
    pub name: String,
}

impl TreeLine {
    pub fn dir(name: impl Into<String>, depth: usize) -> Self {
        Self {
            kind: LineKind::Dir,
            depth,
            name: name.into(),
        }
    }

    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Self {
            kind: LineKind::File,
            depth,
            name: name.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == LineKind::Dir
    }
}

/// Walks a directory top-down and collects the lines of its tree view.
///
/// For each directory the header comes first, then its files, then each
/// subdirectory in turn. Ignored directories are dropped before descent, so
/// nothing beneath them is ever read.
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Walk `root` and return its lines. Fails on the first I/O error; no partial
    /// output is returned.
    pub fn build(&self, root: &Path) -> Result<Vec<TreeLine>> {
        let meta = fs::metadata(root).map_err(|e| TreeError::from_io(root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut lines = Vec::new();
        self.walk_dir(root, 0, &mut lines)?;
        Ok(lines)
    }

    fn walk_dir(&self, path: &Path, depth: usize, lines: &mut Vec<TreeLine>) -> Result<()> {
        lines.push(TreeLine::dir(dir_name(path), depth));

        if self.config.at_max_depth(depth) {
            debug!(path = %path.display(), depth, "depth limit reached, not descending");
            return Ok(());
        }

        let node = TraversalNode::read(path, depth, &self.config)?;

        lines.extend(
            node.files
                .into_iter()
                .map(|name| TreeLine::file(name, node.depth + 1)),
        );

        for dir in &node.dirs {
            self.walk_dir(dir, node.depth + 1, lines)?;
        }

        Ok(())
    }
}

/// Final path component, or the path as given when there is none (`.`, `..`, `/`).
fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render the tree under `root` as plain text.
///
/// `None` for either ignore list selects the default names for that category;
/// `Some(&[])` disables it. Entries keep filesystem listing order.
pub fn generate_tree(
    root: impl AsRef<Path>,
    ignore_dirs: Option<&[&str]>,
    ignore_files: Option<&[&str]>,
) -> Result<String> {
    let config = TreeConfig::default().with_ignore(IgnoreSpec::resolve(ignore_dirs, ignore_files));
    let lines = TreeBuilder::new(config).build(root.as_ref())?;
    Ok(render_lines(&lines))
}
