#![no_main]
use engine::line_col_at;
use libfuzzer_sys::fuzz_target;

// Recombining line and column must give back the byte offset.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The check below is quadratic, keep inputs small
        if s.len() > 4096 {
            return;
        }
        for (pos, _) in s.char_indices() {
            let (line, column) = line_col_at(s, pos);
            let reconstructed = if line == 1 {
                column
            } else {
                let newline = s
                    .char_indices()
                    .filter(|&(_, c)| c == '\n')
                    .nth(line - 2)
                    .map(|(i, _)| i);
                newline.map(|nl| nl + column).unwrap_or(usize::MAX)
            };
            assert_eq!(reconstructed, pos);
        }
    }
});
