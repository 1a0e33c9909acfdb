//! Banner and rule-table display for the CLI.

use rules::RuleSet;

/// Prints the startup banner to stderr.
pub fn print_header() {
    let version = env!("CARGO_PKG_VERSION");
    // Keeps the box aligned even if the version string grows
    let spaces = " ".repeat(24usize.saturating_sub(version.len()));
    eprintln!(
        r#"
    ╭──────────────────────────────────────╮
    │                                      │
    │            SINKSCAN                  │
    │                                      │
    │     Trusted Types sink scanner       │
    │     for scripts and markup           │
    │     Version: {version}{spaces}│
    │                                      │
    ╰──────────────────────────────────────╯
"#
    );
}

/// Prints the built-in rule table for `--list-rules`.
pub fn print_rule_table(rules: &RuleSet) {
    println!(
        "{:<26} {:<9} {:<42} DESCRIPTION",
        "RULE", "SEVERITY", "REQUIRED TYPE"
    );
    for rule in rules.iter() {
        println!(
            "{:<26} {:<9} {:<42} {}",
            rule.name, rule.severity, rule.required_type, rule.description
        );
    }
}
