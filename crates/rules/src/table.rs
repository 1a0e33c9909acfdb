//! Built-in rule and indicator data.
//!
//! Everything here is plain `&'static str` table data; compilation into
//! executable matchers lives in the crate root.

use crate::{Severity, SinkRule};

/// Trusted Types injection sinks, in the order findings are reported.
///
/// Expressions are compiled case-insensitively, so no row needs its own
/// `(?i)` prefix. None of them use lookaround, keeping matching linear
/// even on adversarial input.
pub const SINK_RULES: &[SinkRule] = &[
    SinkRule {
        name: "innerHTML",
        pattern: r"\.innerHTML\s*=",
        severity: Severity::High,
        required_type: "TrustedHTML",
        description: "Direct innerHTML assignment - requires TrustedHTML",
    },
    SinkRule {
        name: "outerHTML",
        pattern: r"\.outerHTML\s*=",
        severity: Severity::High,
        required_type: "TrustedHTML",
        description: "Direct outerHTML assignment - requires TrustedHTML",
    },
    SinkRule {
        name: "insertAdjacentHTML",
        pattern: r"\.insertAdjacentHTML\s*\(",
        severity: Severity::High,
        required_type: "TrustedHTML",
        description: "insertAdjacentHTML call - requires TrustedHTML",
    },
    SinkRule {
        name: "document_write",
        pattern: r"document\.write(ln)?\s*\(",
        severity: Severity::High,
        required_type: "TrustedHTML",
        description: "document.write/writeln call - requires TrustedHTML",
    },
    SinkRule {
        name: "createContextualFragment",
        pattern: r"\.createContextualFragment\s*\(",
        severity: Severity::High,
        required_type: "TrustedHTML",
        description: "Range.createContextualFragment call - requires TrustedHTML",
    },
    SinkRule {
        name: "textContent",
        pattern: r"\.textContent\s*=",
        severity: Severity::Low,
        required_type: "None (safe)",
        description: "textContent assignment - generally safe but flagged for review",
    },
    SinkRule {
        name: "setAttribute_dangerous",
        pattern: r#"\.setAttribute\s*\(\s*['"](?:src|href|action|formaction|onclick|onload|onerror|srcdoc)['"]"#,
        severity: Severity::Medium,
        required_type: "TrustedScriptURL/TrustedURL/TrustedScript",
        description: "setAttribute with potentially dangerous attributes",
    },
    SinkRule {
        name: "eval_call",
        pattern: r"\beval\s*\(",
        severity: Severity::Critical,
        required_type: "TrustedScript",
        description: "eval() call - requires TrustedScript",
    },
    SinkRule {
        name: "setTimeout_string",
        pattern: r#"setTimeout\s*\(\s*['"`]"#,
        severity: Severity::High,
        required_type: "TrustedScript",
        description: "setTimeout with string argument - requires TrustedScript",
    },
    SinkRule {
        name: "setInterval_string",
        pattern: r#"setInterval\s*\(\s*['"`]"#,
        severity: Severity::High,
        required_type: "TrustedScript",
        description: "setInterval with string argument - requires TrustedScript",
    },
    SinkRule {
        name: "Function_constructor",
        pattern: r"\bFunction\s*\(",
        severity: Severity::High,
        required_type: "TrustedScript",
        description: "Function constructor - requires TrustedScript",
    },
];

/// Sanitization routines recognized near a sink.
pub const SANITIZER_INDICATORS: &[&str] = &[
    r"DOMPurify\.sanitize",
    r"\.replace\([^)]*<script[^)]*\)",
    r"\.replace\([^)]*javascript:[^)]*\)",
    r"encodeURIComponent",
    r"encodeURI\(",
    r"escape\(",
];

/// Expressions that suggest attacker-reachable data feeds the sink.
pub const TAINT_INDICATORS: &[&str] = &[
    r"\.value\b",
    r"\.textContent\b",
    r"\.innerText\b",
    r"prompt\(",
    r"location\.",
    r"window\.location",
    r"document\.location",
    r"\.search\b",
    r"\.hash\b",
    r"\.pathname\b",
    r"params\.",
    r"query\.",
    r"request\.",
    r"input\.",
    r"form\.",
];
