//! Built-in Trusted Types sink rules and the context indicators used to
//! qualify their findings, compiled to an executable representation.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

mod table;
pub use table::{SANITIZER_INDICATORS, SINK_RULES, TAINT_INDICATORS};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
/// Severity associated with a sink rule and the findings it produces.
///
/// Variants are declared in ascending order so `Ord` agrees with risk.
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Severities in the order reports list them, most severe first.
    pub const DISPLAY_ORDER: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// One row of the built-in sink table.
pub struct SinkRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub severity: Severity,
    pub required_type: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
/// A sink rule compiled into an executable matcher.
pub struct CompiledRule {
    pub name: String,
    pub pattern: Regex,
    pub severity: Severity,
    pub required_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
/// All compiled sink rules, preserving table order.
pub struct RuleSet {
    pub rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compiles the built-in sink table.
///
/// Expressions match case-insensitively; `.innerhtml =` is as dangerous
/// as `.innerHTML =` once the browser parses it.
pub fn compile() -> Result<RuleSet> {
    let mut rules = Vec::with_capacity(SINK_RULES.len());
    for row in SINK_RULES {
        let pattern = RegexBuilder::new(row.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .with_context(|| format!("invalid match expression for rule '{}'", row.name))?;
        rules.push(CompiledRule {
            name: row.name.to_string(),
            pattern,
            severity: row.severity,
            required_type: row.required_type.to_string(),
            description: row.description.to_string(),
        });
    }
    debug!(count = rules.len(), "Compiled sink rules");
    Ok(RuleSet { rules })
}

#[derive(Debug, Clone)]
/// Compiled taint and sanitizer indicators for context classification.
pub struct IndicatorSet {
    pub sanitizers: Vec<Regex>,
    pub taint: Vec<Regex>,
}

/// Compiles the indicator lists applied around each match.
pub fn indicators() -> Result<IndicatorSet> {
    let set = IndicatorSet {
        sanitizers: compile_indicators(SANITIZER_INDICATORS, "sanitizer")?,
        taint: compile_indicators(TAINT_INDICATORS, "taint")?,
    };
    debug!(
        sanitizers = set.sanitizers.len(),
        taint = set.taint.len(),
        "Compiled context indicators"
    );
    Ok(set)
}

fn compile_indicators(patterns: &[&str], kind: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("invalid {kind} indicator '{p}'"))
        })
        .collect()
}
