//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use twig::{IgnoreSpec, OutputConfig, SortOrder, TreeBuilder, TreeConfig, TreeFormatter};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Show a directory tree, skipping VCS metadata and lockfiles")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Also skip directories with this name (can be used multiple times)
    #[arg(short = 'D', long = "ignore-dir", value_name = "NAME")]
    ignore_dirs: Vec<String>,

    /// Also skip files with this name (can be used multiple times)
    #[arg(short = 'F', long = "ignore-file", value_name = "NAME")]
    ignore_files: Vec<String>,

    /// Start from empty ignore lists instead of the built-in ones
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Sort entries by name instead of filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log traversal decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let base = if args.no_default_ignores {
        IgnoreSpec::empty()
    } else {
        IgnoreSpec::default()
    };
    let ignore = args
        .ignore_dirs
        .iter()
        .fold(base, |spec, name| spec.ignore_dir(name.as_str()));
    let ignore = args
        .ignore_files
        .iter()
        .fold(ignore, |spec, name| spec.ignore_file(name.as_str()));

    let mut config = TreeConfig::default().with_ignore(ignore).with_sort(if args.sort {
        SortOrder::Name
    } else {
        SortOrder::Listing
    });
    if let Some(level) = args.level {
        config = config.with_max_depth(level);
    }

    let lines = match TreeBuilder::new(config).build(&args.path) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    };

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    if let Err(e) = formatter.print(&lines) {
        eprintln!("twig: error writing output: {}", e);
        process::exit(1);
    }
}
