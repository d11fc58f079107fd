//! Tree formatter for terminal output
//!
//! Prints the same text as `render_lines`, optionally coloring directory names.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeLine;

use super::config::OutputConfig;
use super::utils::{DIR_MARKER, indent};

/// Formatter that writes tree lines to a terminal.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Print lines to stdout, one per line.
    pub fn print(&self, lines: &[TreeLine]) -> io::Result<()> {
        // Color was already decided by the caller
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, lines)?;
        stdout.flush()
    }

    /// Write lines to any color-capable writer, each followed by a newline.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, lines: &[TreeLine]) -> io::Result<()> {
        for line in lines {
            write!(out, "{}", indent(line.depth))?;
            if line.is_dir() {
                if self.config.use_color {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                }
                write!(out, "{}{}", line.name, DIR_MARKER)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
