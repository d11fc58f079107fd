//! Directory tree walking logic
//!
//! `TreeBuilder` walks a root directory top-down, drops ignored names before
//! descending, and collects one `TreeLine` per retained directory or file.
//! `generate_tree` wraps the builder and renders the plain-text view.

mod config;
mod filter;
mod traversal;
mod walker;

pub use config::{SortOrder, TreeConfig};
pub use filter::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES, IgnoreSpec};
pub use traversal::TraversalNode;
pub use walker::{LineKind, TreeBuilder, TreeLine, generate_tree};
