//! Shared helpers for the command-line interface: file selection,
//! exclusion patterns and size limits.

use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod args;
pub mod output;
pub mod scan;
pub mod ui;
pub mod walk;

/// Files above this size are skipped during directory scans (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Extensions treated as script or markup sources during directory scans.
pub const SCRIPT_EXTENSIONS: &[&str] = &[
    "js", "mjs", "cjs", "jsx", "ts", "tsx", "html", "htm", "vue", "svelte",
];

/// Indicates whether a path carries one of the [`SCRIPT_EXTENSIONS`].
///
/// # Example
///
/// ```
/// use sinkscan::is_script_file;
/// use std::path::Path;
/// assert!(is_script_file(Path::new("app/Widget.TSX")));
/// assert!(!is_script_file(Path::new("notes.md")));
/// ```
pub fn is_script_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Converts a basic glob pattern to a regular expression.
/// `**` crosses directory separators, `*` stops at them.
///
/// # Example
///
/// ```
/// use sinkscan::glob_to_regex;
/// let re = glob_to_regex("src/*.js").unwrap();
/// assert!(re.is_match("src/main.js"));
/// assert!(!re.is_match("src/vendor/jquery.js"));
/// ```
pub fn glob_to_regex(pat: &str) -> Result<Regex, regex::Error> {
    let mut regex = String::from("^");
    let mut chars = pat.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    regex.push_str(".*");
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push('.'),
            '(' | ')' | '+' | '|' | '^' | '$' | '.' | '[' | ']' | '{' | '}' | '\\' => {
                regex.push('\\');
                regex.push(c);
            }
            _ => regex.push(c),
        }
    }
    regex.push('$');
    Regex::new(&regex)
}

/// Transforms a glob-style exclusion into a [`Regex`].
/// A trailing slash excludes the whole subtree.
///
/// # Example
///
/// ```
/// use sinkscan::parse_exclude;
/// let re = parse_exclude("dist/").unwrap();
/// assert!(re.is_match("dist/bundle.js"));
/// ```
pub fn parse_exclude(s: &str) -> Result<Regex, String> {
    let glob = if s.ends_with('/') {
        format!("{s}**")
    } else {
        s.to_string()
    };
    glob_to_regex(&glob).map_err(|e| e.to_string())
}

/// Exclusions applied unless `--no-default-exclude` is given.
pub fn default_excludes() -> Vec<Regex> {
    ["**/node_modules/**", "**/.git/**", "**/dist/**"]
        .iter()
        .map(|p| parse_exclude(p).expect("valid default"))
        .collect()
}

/// Indicates whether a path should be skipped, either because an
/// exclusion pattern matches or because the file exceeds the size limit.
/// Separators are normalised so patterns work on Windows paths too.
///
/// # Example
///
/// ```
/// use sinkscan::{is_excluded, parse_exclude};
/// use std::path::Path;
/// let patterns = vec![parse_exclude("**/vendor/**").unwrap()];
/// assert!(is_excluded(Path::new("/srv/app/vendor/lib.js"), &patterns, 0));
/// ```
pub fn is_excluded(path: &Path, patterns: &[Regex], max_file_size: u64) -> bool {
    let path_str = path.to_string_lossy().replace('\\', "/");
    if patterns.iter().any(|re| re.is_match(&path_str)) {
        return true;
    }
    if max_file_size > 0 {
        if let Ok(meta) = fs::metadata(path) {
            if meta.is_file() && meta.len() > max_file_size {
                return true;
            }
        }
    }
    false
}

/// Reads `.gitignore` under `root` and converts its entries to
/// exclusion patterns. A missing or unreadable file yields none.
pub fn load_ignore_patterns(root: &Path) -> Vec<Regex> {
    let mut patterns = Vec::new();
    let Ok(content) = fs::read_to_string(root.join(".gitignore")) else {
        return patterns;
    };
    for line in content.lines() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        let entry = entry.trim_start_matches('/');
        let glob = if entry.starts_with("**/") {
            entry.to_string()
        } else {
            format!("**/{entry}")
        };
        match parse_exclude(&glob) {
            Ok(re) => patterns.push(re),
            Err(e) => debug!(pattern = entry, error = %e, "Skipping unparsable ignore entry"),
        }
    }
    patterns
}
