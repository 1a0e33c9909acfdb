//! Entry point for the command-line interface.
//! Delegates to dedicated modules for argument handling,
//! scanning logic and output formatting.

use sinkscan::args::parse_cli;
use sinkscan::scan::run_scan;

fn main() -> anyhow::Result<()> {
    let args = parse_cli();
    run_scan(args)
}
