//! Twig - a directory tree view that skips VCS metadata and lockfiles

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, TreeFormatter, render_lines};
pub use tree::{IgnoreSpec, SortOrder, TreeBuilder, TreeConfig, TreeLine, generate_tree};
