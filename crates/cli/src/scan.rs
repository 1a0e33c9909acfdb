//! End-to-end scan flow: collect files, run the engine, report.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};

use engine::SourceFile;
use reporters::ScanInfo;

use crate::args::Cli;
use crate::output::{self, Format};
use crate::walk::visit;
use crate::{default_excludes, is_excluded, is_script_file, load_ignore_patterns, ui};

pub fn run_scan(args: Cli) -> Result<()> {
    let level = if args.quiet {
        LevelFilter::OFF
    } else if args.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    if args.debug && !args.quiet {
        debug!("Debug mode enabled");
    }

    let rules = rules::compile().context("failed to compile the built-in rule table")?;
    let indicators = rules::indicators().context("failed to compile context indicators")?;
    debug!(count = rules.len(), "Rules loaded");

    if args.list_rules {
        ui::print_rule_table(&rules);
        return Ok(());
    }

    let Some(raw_path) = args.path.as_deref() else {
        bail!("no path given");
    };
    let path = raw_path
        .canonicalize()
        .with_context(|| format!("cannot access '{}'", raw_path.display()))?;

    if args.format == Format::Text && !args.quiet {
        ui::print_header();
    }
    info!(target = %path.display(), "Scan started");

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        error!("Failed to build global thread pool: {e}");
    }

    let mut patterns = args.exclude.clone();
    if !args.no_default_exclude {
        patterns.extend(default_excludes());
    }
    patterns.extend(load_ignore_patterns(&path));

    let single_file = path.is_file();
    let mut queued: Vec<PathBuf> = Vec::new();
    if single_file {
        queued.push(path.clone());
    } else {
        visit(
            &path,
            &|p| is_excluded(p, &patterns, args.max_file_size),
            &mut |p| {
                if is_script_file(p) {
                    queued.push(p.to_path_buf());
                }
                Ok(())
            },
        )?;
    }
    debug!(files = queued.len(), "Files queued");

    let start_time = Instant::now();
    let mut failed_files = 0usize;
    let mut sources: Vec<SourceFile> = Vec::with_capacity(queued.len());
    for p in &queued {
        match fs::read_to_string(p) {
            Ok(content) => sources.push(SourceFile::new(p.clone(), content)),
            Err(e) if single_file => {
                return Err(e).with_context(|| format!("failed to read '{}'", p.display()));
            }
            Err(e) => {
                warn!(file = %p.display(), error = %e, "Skipping unreadable file");
                failed_files += 1;
            }
        }
    }

    let findings = engine::scan_files(&sources, &rules, &indicators);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let scan_info = ScanInfo {
        rules_loaded: rules.len(),
        files_scanned: sources.len(),
        failed_files,
        duration_ms,
    };
    let report = output::render_report(&findings, args.format, Some(&scan_info))?;
    print!("{report}");

    if !args.no_save {
        let target = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(output::default_results_name(args.format)));
        match fs::write(&target, output::strip_ansi(&report)) {
            Ok(()) => info!(path = %target.display(), "Report saved"),
            Err(e) => warn!(path = %target.display(), error = %e, "Failed to save report"),
        }
    }

    info!(findings = findings.len(), "Scan completed");
    if let Some(threshold) = args.fail_on {
        let worst = findings.iter().map(|f| f.severity).max();
        if worst.is_some_and(|w| w >= threshold) {
            std::process::exit(1);
        }
    }
    Ok(())
}
