//! Tree formatting and display
//!
//! - `utils` - plain line formatting (`render_lines`)
//! - `tree` - terminal formatter with optional color
//! - `config` - output configuration

mod config;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use tree::TreeFormatter;
pub use utils::{DIR_MARKER, INDENT, format_line, indent, render_lines};

#[cfg(test)]
mod tests {
    use termcolor::{Buffer, NoColor};

    use crate::tree::TreeLine;

    use super::*;

    fn sample() -> Vec<TreeLine> {
        vec![
            TreeLine::dir("R", 0),
            TreeLine::file("a.txt", 1),
            TreeLine::dir("sub", 1),
            TreeLine::file("b.txt", 2),
        ]
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(INDENT, "│   ");
        assert_eq!(INDENT.chars().count(), 4);
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "│   │   ");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&TreeLine::dir("src", 0)), "src/");
        assert_eq!(format_line(&TreeLine::dir("sub", 1)), "│   sub/");
        assert_eq!(format_line(&TreeLine::file("main.rs", 2)), "│   │   main.rs");
    }

    #[test]
    fn test_render_lines_joins_without_trailing_newline() {
        let output = render_lines(&sample());
        assert_eq!(output, "R/\n│   a.txt\n│   sub/\n│   │   b.txt");
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_render_lines_empty() {
        assert_eq!(render_lines(&[]), "");
    }

    #[test]
    fn test_formatter_plain_matches_render() {
        let formatter = TreeFormatter::new(OutputConfig { use_color: false });
        let mut out = NoColor::new(Vec::new());
        formatter.write_to(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, format!("{}\n", render_lines(&sample())));
    }

    #[test]
    fn test_formatter_color_wraps_directory_names() {
        let formatter = TreeFormatter::new(OutputConfig { use_color: true });
        let mut out = Buffer::ansi();
        formatter.write_to(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\x1b["), "expected ANSI escapes: {:?}", text);
        assert!(text.contains("a.txt\n"));
        assert!(text.contains("sub/"));
    }
}
