//! Declarative definition of the command-line arguments.

use clap::Parser;
use regex::Regex;
use rules::Severity;
use std::path::PathBuf;

use crate::output::Format;
use crate::DEFAULT_MAX_FILE_SIZE;

/// Command line interface for the scanner.
#[derive(Parser, Debug)]
#[command(
    name = "sinkscan",
    version,
    about = "Find DOM sinks that a strict Trusted Types policy would reject",
    long_about = "Scans JavaScript, TypeScript and markup sources for DOM sinks that a \
strict Trusted Types policy would reject: innerHTML and outerHTML assignments, \
document.write, eval and the other string-to-code paths. Findings carry exact \
positions, the matched text and a first-pass triage of the surrounding context.

Examples:
  sinkscan src/app.js            Scan a single file
  sinkscan src/ --format json    Scan a tree and emit JSON
  sinkscan src/ --fail-on high   Gate CI on serious findings
  sinkscan --list-rules          Show the built-in rule table"
)]
pub struct Cli {
    /// File or directory to scan
    #[arg(required_unless_present = "list_rules")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the report to this path instead of the default results file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write a results file
    #[arg(long)]
    pub no_save: bool,

    /// Exit non-zero when a finding reaches this severity (low, medium, high, critical)
    #[arg(long, value_parser = parse_severity)]
    pub fail_on: Option<Severity>,

    /// Worker threads for scanning (0 lets the runtime decide)
    #[arg(short = 'j', long, default_value_t = default_threads())]
    pub threads: usize,

    /// Glob patterns to exclude, comma separated or repeated
    #[arg(short = 'x', long = "exclude", value_parser = crate::parse_exclude, value_delimiter = ',')]
    pub exclude: Vec<Regex>,

    /// Disable the built-in exclusions (node_modules, .git, dist)
    #[arg(long)]
    pub no_default_exclude: bool,

    /// Skip files larger than this many bytes (0 disables the limit)
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Print the built-in rule table and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Verbose diagnostics on stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress all diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses the process arguments into [`Cli`].
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse()
}

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
