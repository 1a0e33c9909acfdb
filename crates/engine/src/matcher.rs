//! Full-text rule matching and source position translation.

use rules::RuleSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single positioned hit of one sink rule.
pub struct Match {
    /// Name of the rule that matched.
    pub rule: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// Exact matched text, always equal to `source[start..end]`.
    pub text: String,
}

/// Runs every rule over the whole source.
///
/// Matches come back grouped by rule in table order, left to right within
/// each rule. Reports regroup by severity later, so the raw order only
/// has to be deterministic.
pub fn find_matches(source: &str, rules: &RuleSet) -> Vec<Match> {
    let mut matches = Vec::new();
    for rule in rules.iter() {
        for m in rule.pattern.find_iter(source) {
            matches.push(Match {
                rule: rule.name.clone(),
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            });
        }
    }
    trace!(count = matches.len(), "Collected raw matches");
    matches
}

/// Translates a byte offset into a 1-based line and a column.
///
/// The column is the distance from the nearest preceding newline, or the
/// offset itself when none precedes, so `pos` can always be recovered
/// from the pair.
pub fn line_col_at(source: &str, pos: usize) -> (usize, usize) {
    let prefix = &source[..pos];
    let line = 1 + prefix.bytes().filter(|&b| b == b'\n').count();
    let column = match prefix.rfind('\n') {
        Some(nl) => pos - nl,
        None => pos,
    };
    (line, column)
}
