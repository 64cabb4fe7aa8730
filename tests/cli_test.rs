use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("987654321"))
        .stdout(predicate::str::contains("1746"));

    Ok(())
}

#[test]
fn test_cli_custom_amount() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["--amount", "100.0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("97"));

    Ok(())
}

#[test]
fn test_cli_failed_callback() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("--fail-callback");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not completed"))
        .stdout(predicate::str::contains("1746").not());

    Ok(())
}
