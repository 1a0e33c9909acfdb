//! Heuristic classification of the text surrounding a match.

use crate::matcher::Match;
use regex::Regex;
use rules::IndicatorSet;
use serde::{Deserialize, Serialize};

/// Characters inspected on each side of a match.
pub const WINDOW_RADIUS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// What the surrounding code suggests about a matched sink.
pub struct ContextAnalysis {
    /// The window references a known source of attacker-reachable data.
    pub likely_user_controlled: bool,
    /// The window references a recognized sanitization routine.
    pub has_sanitization: bool,
    /// Function the match appears in, when one can be named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing_function: Option<String>,
}

/// Classifies the window around `m`.
///
/// Each indicator list short-circuits on its first matching expression;
/// which indicator fired is not recorded, only that one did.
pub fn analyze_context(source: &str, m: &Match, indicators: &IndicatorSet) -> ContextAnalysis {
    let (lo, hi) = window_bounds(source, m.start, m.end);
    let window = &source[lo..hi];
    ContextAnalysis {
        likely_user_controlled: indicators.taint.iter().any(|re| re.is_match(window)),
        has_sanitization: indicators.sanitizers.iter().any(|re| re.is_match(window)),
        enclosing_function: enclosing_function(source, &m.text),
    }
}

/// Byte bounds of the window `WINDOW_RADIUS` characters around a match.
///
/// Measured in characters, not bytes, so a multi-byte code point is never
/// split at either edge.
fn window_bounds(source: &str, start: usize, end: usize) -> (usize, usize) {
    let lo = source[..start]
        .char_indices()
        .rev()
        .nth(WINDOW_RADIUS - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let hi = source[end..]
        .char_indices()
        .nth(WINDOW_RADIUS)
        .map(|(idx, _)| end + idx)
        .unwrap_or(source.len());
    (lo, hi)
}

/// Best-effort name of the `function name(...)` declaration whose body
/// text leads up to the matched snippet.
///
/// The body scan never crosses a closing brace, so a sink past the first
/// `}` of its file region comes back as `None`. Unlike rule matching the
/// lookup is case-sensitive.
fn enclosing_function(source: &str, snippet: &str) -> Option<String> {
    let pattern = format!(
        r"function\s+(\w+)\s*\([^)]*\)\s*\{{[^}}]*{}",
        regex::escape(snippet)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(source)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}
