use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn missing_path_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg("does-not-exist.js");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot access 'does-not-exist.js'"));
    Ok(())
}

#[test]
fn a_path_is_required_without_list_rules() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}
