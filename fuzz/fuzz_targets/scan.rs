#![no_main]
use engine::SourceFile;
use libfuzzer_sys::fuzz_target;
use rules::{IndicatorSet, RuleSet};
use std::sync::OnceLock;

static RULES: OnceLock<RuleSet> = OnceLock::new();
static INDICATORS: OnceLock<IndicatorSet> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let rules = RULES.get_or_init(|| rules::compile().unwrap());
        let indicators = INDICATORS.get_or_init(|| rules::indicators().unwrap());
        let file = SourceFile::new("fuzz.js", s.to_string());
        let _ = engine::scan_source(&file, rules, indicators);
    }
});
