//! Name-based ignore rules for tree walking

use std::collections::HashSet;
use std::ffi::OsStr;

/// Directories skipped by default: VCS, editor and build output.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    ".github",
    ".vscode",
    ".astro",
    "node_modules",
    ".history",
    "dist",
];

/// Files skipped by default: lockfiles, OS metadata, and this tool's own name.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[
    ".DS_Store",
    ".gitignore",
    "package-lock.json",
    "pnpm-lock.yaml",
    env!("CARGO_PKG_NAME"),
];

/// Two independent sets of bare names: one checked against directories, one against files.
///
/// Matching is exact on the final path component, so an ignored name is skipped
/// at any depth. A name in `dirs` never hides a file with that name, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSpec {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl IgnoreSpec {
    /// An ignore spec that keeps everything.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
        }
    }

    /// Resolve each category on its own: `None` keeps the default set,
    /// `Some` replaces it (an empty slice disables that category).
    pub fn resolve(dirs: Option<&[&str]>, files: Option<&[&str]>) -> Self {
        Self {
            dirs: to_set(dirs.unwrap_or(DEFAULT_IGNORED_DIRS)),
            files: to_set(files.unwrap_or(DEFAULT_IGNORED_FILES)),
        }
    }

    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.dirs.insert(name.into());
        self
    }

    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into());
        self
    }

    /// Check if a directory with this bare name is pruned.
    pub fn is_ignored_dir(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.dirs.contains(n))
    }

    /// Check if a file with this bare name is hidden.
    pub fn is_ignored_file(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.files.contains(n))
    }

    pub fn ignored_dirs(&self) -> &HashSet<String> {
        &self.dirs
    }

    pub fn ignored_files(&self) -> &HashSet<String> {
        &self.files
    }
}

impl Default for IgnoreSpec {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}
