//! Line formatting shared by the plain and colored renderers

use crate::tree::{LineKind, TreeLine};

/// One indentation unit: vertical bar and three spaces.
pub const INDENT: &str = "│   ";

/// Suffix appended to directory names.
pub const DIR_MARKER: char = '/';

/// Indentation prefix for `depth` units.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Format a single line without any trailing newline.
pub fn format_line(line: &TreeLine) -> String {
    match line.kind {
        LineKind::Dir => format!("{}{}{}", indent(line.depth), line.name, DIR_MARKER),
        LineKind::File => format!("{}{}", indent(line.depth), line.name),
    }
}

/// Render all lines as plain text joined by newlines, with no trailing newline.
pub fn render_lines(lines: &[TreeLine]) -> String {
    lines.iter().map(format_line).collect::<Vec<_>>().join("\n")
}
