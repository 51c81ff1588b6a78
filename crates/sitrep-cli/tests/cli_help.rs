use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("sitrep")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("welcome"))
        .stdout(predicate::str::contains("systems"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_systems_help_shows_flags() {
    cargo_bin_cmd!("sitrep")
        .args(["systems", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("sitrep")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_dashboard_requires_a_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sitrep")
        .env("SITREP_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"))
        .stderr(predicate::str::contains("sitrep systems"));
}

#[test]
fn test_welcome_requires_a_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sitrep")
        .env("SITREP_HOME", dir.path())
        .arg("welcome")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
