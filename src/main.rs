//! CLI entry point for lsr

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use lsr::{
    DEFAULT_IGNORE_FILE, DEFAULT_LIMIT, ExclusionSet, LimitAction, OutputConfig, TerminalPrompt,
    ThresholdScope, TypeFilter, Walker, WalkerConfig, print_entries,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

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
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List files recursively, skipping names from .gitignore")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(
        short = 'd',
        long = "directory",
        default_value = ".",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    directory: PathBuf,

    /// Only list entries of this type: file or dir
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Descend only N levels below the listed directory
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Exclude entries with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Read exclusions from this file
    #[arg(long = "ignore-file", value_name = "PATH", default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: PathBuf,

    /// Do not read an ignore file; only the built-in exclusions apply
    #[arg(long = "no-ignore-file", conflicts_with = "ignore_file")]
    no_ignore_file: bool,

    /// Let `!name` lines in the ignore file override exclusions
    #[arg(long = "honor-negation")]
    honor_negation: bool,

    /// Number of entries that may be listed before asking to continue
    #[arg(long = "limit", default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Compare each directory's own entry count to the limit instead of the running total
    #[arg(long = "per-directory")]
    per_directory: bool,

    /// Never ask; keep listing past the limit
    #[arg(short = 'y', long = "yes", conflicts_with = "stop_at_limit")]
    yes: bool,

    /// Never ask; stop listing once the limit is passed
    #[arg(long = "stop-at-limit")]
    stop_at_limit: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Stray tokens, including unknown flags
    #[arg(hide = true, allow_hyphen_values = true)]
    unexpected: Vec<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if !args.unexpected.is_empty() {
        println!("Unexpected argument.");
        return;
    }

    let mut exclusions = if args.no_ignore_file {
        ExclusionSet::defaults()
    } else {
        ExclusionSet::load(&args.ignore_file)
    }
    .honor_negation(args.honor_negation);
    for name in &args.ignore {
        exclusions.exclude(name.as_str());
    }

    let on_limit = if args.yes {
        LimitAction::Continue
    } else if args.stop_at_limit {
        LimitAction::Stop
    } else {
        LimitAction::Ask
    };

    let config = WalkerConfig {
        limit: args.limit,
        scope: if args.per_directory {
            ThresholdScope::PerDirectory
        } else {
            ThresholdScope::Cumulative
        },
        on_limit,
        type_filter: args.kind.as_deref().map(TypeFilter::parse),
        max_depth: args.level,
    };

    let walker = Walker::new(config).with_exclusions(exclusions);
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());
    let entries = walker.walk(&args.directory, &mut prompt);
    tracing::debug!(entries = entries.len(), "listing complete");

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        json: args.json,
    };

    if let Err(e) = print_entries(&entries, &output_config) {
        eprintln!("lsr: error writing output: {}", e);
        process::exit(1);
    }
}
