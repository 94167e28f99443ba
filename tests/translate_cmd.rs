use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Point config discovery at an empty directory so a user's own config never leaks in.
fn cargo_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bf-letters").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn test_translate_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.bf");
    let output = dir.path().join("prog.letters");
    fs::write(&input, "+-<>.,[]#\nOIAE\n").unwrap();

    cargo_bin(&dir)
        .arg("-i").arg(&input)
        .arg("-o").arg(&output)
        .assert()
        .success()
        .stdout("oiae.,uy#\noiae\n\n")
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), "oiae.,uy#\noiae\n");
}

#[test]
fn test_default_paths_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.bf"), "++[>+<-]").unwrap();

    cargo_bin(&dir)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("ooueoaiy\n");

    let written = fs::read_to_string(dir.path().join("output.bf")).unwrap();
    assert_eq!(written, "ooueoaiy");
}

#[test]
fn test_long_flags_and_comments() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bf");
    let output = dir.path().join("b.bf");
    fs::write(&input, "o+// keep raw +-\n// only a comment\n").unwrap();

    cargo_bin(&dir)
        .arg("--input").arg(&input)
        .arg("--output").arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "oo// keep raw +-\n// only a comment\n"
    );
}

#[test]
fn test_quiet_suppresses_echo() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bf");
    let output = dir.path().join("b.bf");
    fs::write(&input, "+").unwrap();

    cargo_bin(&dir)
        .arg("-q").arg("-i").arg(&input).arg("-o").arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), "o");
}

#[test]
fn test_quiet_keeps_requested_logging() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bf");
    let output = dir.path().join("b.bf");
    fs::write(&input, "+").unwrap();

    cargo_bin(&dir)
        .arg("-q").arg("-v")
        .arg("-i").arg(&input).arg("-o").arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[INFO] translated"));
}

#[test]
fn test_second_pass_is_identity() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("1.bf");
    let second = dir.path().join("2.bf");
    let third = dir.path().join("3.bf");
    fs::write(&first, "#!/usr/bin/env bf\n+[-]>, // echo\n<.\n").unwrap();

    cargo_bin(&dir).arg("-i").arg(&first).arg("-o").arg(&second).assert().success();
    cargo_bin(&dir).arg("-i").arg(&second).arg("-o").arg(&third).assert().success();

    let once = fs::read_to_string(&second).unwrap();
    assert_eq!(once, "#!/usr/bin/env bf\nouiye, // echo\na.\n");
    assert_eq!(fs::read_to_string(&third).unwrap(), once);
}

#[test]
fn test_help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin(&dir)
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("--input")));
}
