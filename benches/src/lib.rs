//! Synthetic JavaScript corpus used by the benchmarks.

/// Builds a source of `blocks` small render functions, one sink per block.
/// Every block reads a form value so the context pass has work to do.
pub fn synthetic_source(blocks: usize) -> String {
    let sinks = [
        "el.innerHTML = html;",
        "document.write(banner);",
        "eval(expr);",
        "node.textContent = label;",
        "frame.insertAdjacentHTML('beforeend', widget);",
    ];
    let mut src = String::new();
    for i in 0..blocks {
        let sink = sinks[i % sinks.len()];
        src.push_str(&format!(
            "function render{i}(input) {{\n  const html = input.value;\n  {sink}\n  return html.length;\n}}\n\n"
        ));
    }
    src
}

#[cfg(test)]
mod tests {
    use super::synthetic_source;

    #[test]
    fn corpus_grows_with_block_count() {
        assert!(synthetic_source(10).len() < synthetic_source(20).len());
    }

    #[test]
    fn corpus_triggers_the_scanner() {
        let rules = rules::compile().unwrap();
        let indicators = rules::indicators().unwrap();
        let file = engine::SourceFile::new("bench.js", synthetic_source(5));
        assert_eq!(engine::scan_source(&file, &rules, &indicators).len(), 5);
    }
}
