//! Report rendering and persistence.
//!
//! The report is rendered once; the same text goes to stdout and, unless
//! saving is disabled, to a results file with ANSI colors stripped.

use clap::ValueEnum;
use engine::Finding;
use regex::Regex;
use reporters::ScanInfo;
use std::sync::OnceLock;

/// Output formats supported by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Sarif,
}

impl Format {
    /// File extension used for saved reports.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Json => "json",
            Format::Sarif => "sarif",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "sarif" => Ok(Format::Sarif),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

impl From<Format> for reporters::Format {
    fn from(fmt: Format) -> Self {
        match fmt {
            Format::Text => reporters::Format::Text,
            Format::Json => reporters::Format::Json,
            Format::Sarif => reporters::Format::Sarif,
        }
    }
}

/// File name reports are saved under when `--output` is not given.
pub fn default_results_name(fmt: Format) -> String {
    format!("trusted_types_scan_results.{}", fmt.extension())
}

/// Renders the findings in the requested format.
pub fn render_report(
    findings: &[Finding],
    fmt: Format,
    info: Option<&ScanInfo>,
) -> anyhow::Result<String> {
    Ok(reporters::render_report(findings, fmt.into(), info)?)
}

static ANSI_RE: OnceLock<Regex> = OnceLock::new();

/// Removes ANSI color sequences so saved reports stay plain text.
pub fn strip_ansi(text: &str) -> String {
    let re = ANSI_RE.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid ansi pattern"));
    re.replace_all(text, "").into_owned()
}
