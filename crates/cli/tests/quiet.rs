use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn quiet_silences_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path())
        .arg(&file)
        .args(["--quiet", "--no-save"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("innerHTML"));
    Ok(())
}

#[test]
fn debug_enables_verbose_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(&file, "node.innerHTML = data;\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path())
        .arg(&file)
        .args(["--debug", "--no-save"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Debug mode enabled"));
    Ok(())
}
