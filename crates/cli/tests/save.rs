use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn writes_a_results_file_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg(&file);
    cmd.assert().success();

    let saved = fs::read_to_string(dir.path().join("trusted_types_scan_results.txt"))?;
    assert!(saved.contains("innerHTML"));
    // Saved reports are plain text
    assert!(!saved.contains('\u{1b}'));
    Ok(())
}

#[test]
fn no_save_leaves_no_results_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg(&file).arg("--no-save");
    cmd.assert().success();

    assert!(!dir.path().join("trusted_types_scan_results.txt").exists());
    Ok(())
}

#[test]
fn output_overrides_the_default_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;
    let report = dir.path().join("report.json");

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path())
        .arg(&file)
        .args(["--format", "json"])
        .arg("--output")
        .arg(&report);
    cmd.assert().success();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report)?)?;
    assert_eq!(saved["total"], 1);
    assert!(!dir.path().join("trusted_types_scan_results.json").exists());
    Ok(())
}

#[test]
fn saved_report_extension_tracks_the_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg(&file).args(["--format", "sarif"]);
    cmd.assert().success();

    assert!(dir.path().join("trusted_types_scan_results.sarif").exists());
    Ok(())
}
