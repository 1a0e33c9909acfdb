use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn lists_every_builtin_rule() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.arg("--list-rules");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("REQUIRED TYPE"))
        .stdout(predicate::str::contains("innerHTML"))
        .stdout(predicate::str::contains("document_write"))
        .stdout(predicate::str::contains("setAttribute_dangerous"))
        .stdout(predicate::str::contains("Function_constructor"))
        .stdout(predicate::str::contains("TrustedScriptURL/TrustedURL/TrustedScript"));
    Ok(())
}

#[test]
fn list_rules_needs_no_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.arg("--list-rules");
    let output = cmd.output()?;
    assert!(output.status.success());

    // One header line plus one line per rule
    let lines = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty());
    assert_eq!(lines.count(), 12);
    Ok(())
}
