//! Scans script sources for Trusted Types sinks and assembles findings
//! with location, surrounding context and classification attached.

pub mod context;
pub mod matcher;

pub use context::{analyze_context, ContextAnalysis, WINDOW_RADIUS};
pub use matcher::{find_matches, line_col_at, Match};

use rayon::prelude::*;
use rules::{IndicatorSet, RuleSet, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Lines of surrounding code captured on each side of a finding.
pub const SNIPPET_RADIUS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single sink occurrence with everything a report needs.
pub struct Finding {
    /// Rule that produced the finding.
    pub rule: String,
    /// Severity assigned by the rule.
    pub severity: Severity,
    /// Path of the scanned file.
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// Exact matched text.
    pub matched: String,
    /// Trimmed content of the matched line.
    pub line_content: String,
    /// Numbered snippet of the surrounding lines.
    pub context: String,
    pub description: String,
    /// Trusted Types type that would make the sink safe.
    pub required_type: String,
    pub analysis: ContextAnalysis,
}

#[derive(Debug, Clone)]
/// A script file read into memory for scanning.
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Scans one source text with every rule and assembles findings.
///
/// Findings keep the raw match order: rule table order first, position
/// within the file second.
pub fn scan_source(file: &SourceFile, rules: &RuleSet, indicators: &IndicatorSet) -> Vec<Finding> {
    let source = file.content.as_str();
    let lines: Vec<&str> = source.split('\n').collect();
    let findings: Vec<Finding> = find_matches(source, rules)
        .into_iter()
        .filter_map(|m| {
            let rule = rules.get(&m.rule)?;
            let (line, column) = line_col_at(source, m.start);
            let analysis = analyze_context(source, &m, indicators);
            Some(Finding {
                rule: rule.name.clone(),
                severity: rule.severity,
                file: file.path.clone(),
                line,
                column,
                start: m.start,
                end: m.end,
                line_content: lines
                    .get(line - 1)
                    .map(|l| l.trim().to_string())
                    .unwrap_or_default(),
                context: context_snippet(&lines, line),
                matched: m.text,
                description: rule.description.clone(),
                required_type: rule.required_type.clone(),
                analysis,
            })
        })
        .collect();
    debug!(
        file = %file.path.display(),
        count = findings.len(),
        "File scanned"
    );
    findings
}

/// Scans many files across the rayon pool.
///
/// Results come back in the order the files were given, each file keeping
/// its single-file finding order, so repeated runs are identical.
pub fn scan_files(
    files: &[SourceFile],
    rules: &RuleSet,
    indicators: &IndicatorSet,
) -> Vec<Finding> {
    debug!(files = files.len(), rules = rules.len(), "Starting scan");
    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .map(|f| scan_source(f, rules, indicators))
        .collect();
    per_file.into_iter().flatten().collect()
}

/// Renders the numbered lines around `line`, `SNIPPET_RADIUS` on each
/// side, clamped to the file.
fn context_snippet(lines: &[&str], line: usize) -> String {
    let first = line.saturating_sub(SNIPPET_RADIUS + 1);
    let last = (line + SNIPPET_RADIUS).min(lines.len());
    lines[first..last]
        .iter()
        .enumerate()
        .map(|(i, l)| format!("{:4}: {}", first + i + 1, l))
        .collect::<Vec<_>>()
        .join("\n")
}
