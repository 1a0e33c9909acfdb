use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn reports_findings_for_a_single_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("vuln.js");
    fs::write(
        &file,
        "const q = document.location.search;\nelement.innerHTML = q;\n",
    )?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg(&file).arg("--no-save");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vuln.js:2:8 innerHTML"))
        .stdout(predicate::str::contains("Requires: TrustedHTML"))
        .stdout(predicate::str::contains("Likely user-controlled input"))
        .stdout(predicate::str::contains("Total: 1"));
    Ok(())
}

#[test]
fn scans_directories_recursively() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("src/widgets"))?;
    fs::write(dir.path().join("src/app.js"), "eval(payload);\n")?;
    fs::write(
        dir.path().join("src/widgets/banner.js"),
        "banner.outerHTML = markup;\n",
    )?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path())
        .arg(dir.path())
        .args(["-j", "2", "--no-save"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eval_call"))
        .stdout(predicate::str::contains("outerHTML"))
        .stdout(predicate::str::contains("Total: 2"));
    Ok(())
}

#[test]
fn clean_sources_produce_an_empty_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clean.js");
    fs::write(&file, "const total = 2 + 2;\nconsole.log(total);\n")?;

    let mut cmd = Command::cargo_bin("sinkscan")?;
    cmd.current_dir(dir.path()).arg(&file).arg("--no-save");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No unsafe sink usage found"));
    Ok(())
}
