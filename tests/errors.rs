use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cargo_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bf-letters").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin(&dir)
        .arg("-i").arg(dir.path().join("absent.bf"))
        .arg("-o").arg(dir.path().join("out.bf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read").and(predicate::str::contains("absent.bf")))
        .stdout(predicate::str::is_empty());

    assert!(!dir.path().join("out.bf").exists());
}

#[test]
fn test_missing_default_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin(&dir)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input.bf"));
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bf");
    fs::write(&input, "+").unwrap();

    cargo_bin(&dir)
        .arg("-i").arg(&input)
        .arg("-o").arg(dir.path().join("no_such_dir").join("out.bf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn test_non_utf8_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bin.bf");
    fs::write(&input, [0xff, 0xfe, b'+']).unwrap();

    cargo_bin(&dir)
        .arg("-i").arg(&input)
        .arg("-o").arg(dir.path().join("out.bf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin(&dir).arg("--bogus").assert().code(2);
}

#[test]
fn test_empty_input_warns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bf");
    fs::write(&input, "").unwrap();

    cargo_bin(&dir)
        .arg("-i").arg(&input)
        .arg("-o").arg(dir.path().join("out.bf"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning").and(predicate::str::contains("is empty")));
}
