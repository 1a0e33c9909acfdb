//! Renders findings as text for people, JSON for integrations and SARIF
//! for code-scanning platforms. One rendering path serves stdout and the
//! saved results file alike.

use engine::Finding;
use rules::Severity;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::debug;

mod sarif;

/// Wraps the severity label in plain ANSI codes, red for anything a
/// reviewer must look at first.
fn color_severity(sev: Severity) -> String {
    let code = match sev {
        Severity::Critical | Severity::High => "\x1b[31m",
        Severity::Medium => "\x1b[33m",
        Severity::Low => "\x1b[32m",
    };
    format!("{code}{sev}\x1b[0m")
}

/// Draws a one-line box around a title.
fn simple_box(title: &str) -> String {
    let bar = "─".repeat(title.len() + 2);
    format!("╭{bar}╮\n│ {title} │\n╰{bar}╯\n")
}

/// Renders the statistics section shown above text reports.
fn render_stats(info: &ScanInfo) -> String {
    let mut out = String::new();
    out.push_str(&simple_box("Scan Status"));
    out.push('\n');
    out.push_str(&format!(
        "    Scanning {} file(s) with {} rules:\n\n",
        info.files_scanned, info.rules_loaded
    ));
    out.push_str("    Metric                    Value\n");
    out.push_str("    ──────────────────────────────\n");
    let rows = [
        ("Duration", format!("{}ms", info.duration_ms)),
        ("Failed files", info.failed_files.to_string()),
    ];
    for (metric, value) in rows {
        out.push_str(&format!("    {metric:<25} {value}\n"));
    }
    out
}

#[derive(Debug, Clone, Copy)]
/// Supported formats for printing findings.
pub enum Format {
    /// Severity-grouped plain text for terminals.
    Text,
    /// JSON wrapper for scripted consumers.
    Json,
    /// Report conforming to the SARIF specification.
    Sarif,
}

#[derive(Serialize)]
/// Shape of the JSON report body.
struct JsonReport<'a> {
    findings: &'a [Finding],
    total: usize,
}

/// Scan statistics displayed above text reports.
pub struct ScanInfo {
    pub rules_loaded: usize,
    pub files_scanned: usize,
    pub failed_files: usize,
    pub duration_ms: u64,
}

/// Groups findings by severity in display order, skipping empty groups.
fn group_by_severity(findings: &[Finding]) -> Vec<(Severity, Vec<&Finding>)> {
    Severity::DISPLAY_ORDER
        .iter()
        .filter_map(|&sev| {
            let group: Vec<&Finding> = findings.iter().filter(|f| f.severity == sev).collect();
            if group.is_empty() {
                None
            } else {
                Some((sev, group))
            }
        })
        .collect()
}

/// Tallies findings per rule, most frequent first, ties by name.
fn rule_frequencies(findings: &[Finding]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for f in findings {
        *counts.entry(f.rule.as_str()).or_default() += 1;
    }
    let mut tally: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally
}

/// Renders a full report to a string.
///
/// The caller decides where the text goes; the CLI prints it and saves
/// the same copy to the results file.
///
/// # Example
/// ```
/// use reporters::{render_report, Format, ScanInfo};
/// let info = ScanInfo {
///     rules_loaded: 11,
///     files_scanned: 5,
///     failed_files: 0,
///     duration_ms: 12,
/// };
/// let report = render_report(&[], Format::Text, Some(&info)).unwrap();
/// assert!(report.contains("No unsafe sink usage found"));
/// ```
pub fn render_report(
    findings: &[Finding],
    fmt: Format,
    scan_info: Option<&ScanInfo>,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write_findings(&mut buf, findings, fmt, scan_info)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes findings to a generic `Write`, used for tests.
pub(crate) fn write_findings<W: Write>(
    out: &mut W,
    findings: &[Finding],
    fmt: Format,
    scan_info: Option<&ScanInfo>,
) -> io::Result<()> {
    debug!(count = findings.len(), "Rendering report");
    match fmt {
        Format::Text => write_text(out, findings, scan_info),
        Format::Json => {
            let body = JsonReport {
                findings,
                total: findings.len(),
            };
            let json = serde_json::to_string_pretty(&body)?;
            writeln!(out, "{json}")
        }
        Format::Sarif => {
            let json = serde_json::to_string_pretty(&sarif::to_sarif(findings))?;
            writeln!(out, "{json}")
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    findings: &[Finding],
    scan_info: Option<&ScanInfo>,
) -> io::Result<()> {
    if let Some(info) = scan_info {
        writeln!(out, "{}", render_stats(info))?;
    }
    writeln!(out, "{}", simple_box("Results"))?;
    if findings.is_empty() {
        return writeln!(out, "✔ No unsafe sink usage found.");
    }
    writeln!(out, "⚠ Found {} finding(s):\n", findings.len())?;
    for (sev, group) in group_by_severity(findings) {
        writeln!(out, "{} ({} finding(s))", color_severity(sev), group.len())?;
        writeln!(out, "{}", "─".repeat(50))?;
        for f in group {
            write_finding(out, f)?;
        }
    }
    writeln!(out, "Summary by rule")?;
    writeln!(out, "{}", "─".repeat(30))?;
    for (rule, count) in rule_frequencies(findings) {
        writeln!(out, "{rule}: {count}")?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {}", findings.len())
}

/// Writes one finding block inside its severity group.
fn write_finding<W: Write>(out: &mut W, f: &Finding) -> io::Result<()> {
    writeln!(out, "{}:{}:{} {}", f.file.display(), f.line, f.column, f.rule)?;
    writeln!(out, "    {}", f.description)?;
    writeln!(out, "    Requires: {}", f.required_type)?;
    writeln!(out, "    Matched: {}", f.matched)?;
    writeln!(out, "    ↳  {}", f.line_content)?;
    if f.analysis.likely_user_controlled {
        writeln!(out, "    • Likely user-controlled input")?;
    }
    if f.analysis.has_sanitization {
        writeln!(out, "    • Sanitization detected nearby")?;
    }
    if let Some(name) = &f.analysis.enclosing_function {
        writeln!(out, "    • In function: {name}")?;
    }
    writeln!(out, "    Context:")?;
    for line in f.context.split('\n') {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests;
