use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{EXAMPLE, TempWorkspace};

fn almanac() -> Command {
    Command::new(env!("CARGO_BIN_EXE_almanac"))
}

#[test]
fn shows_help() {
    almanac()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("almanac"));
}

#[test]
fn example_file_gives_46() {
    let ws = TempWorkspace::new();
    almanac()
        .arg(ws.example())
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum location: 46"));
}

#[test]
fn points_layout_gives_35() {
    let ws = TempWorkspace::new();
    almanac()
        .args(["--seeds", "points", "--sequential"])
        .arg(ws.example())
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum location: 35"));
}

#[test]
fn reads_stdin() {
    almanac()
        .args(["--format", "json", "-"])
        .write_stdin(EXAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": 46"));
}

#[test]
fn bad_header_fails() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("bad.txt", "seeds: 1 2\n\nseed to soil\n1 2 3\n");
    almanac()
        .arg(file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid header"));
}

#[test]
fn missing_file_fails() {
    let ws = TempWorkspace::new();
    almanac()
        .arg(ws.create_file("placeholder", "").with_file_name("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn zero_jobs_is_rejected() {
    let ws = TempWorkspace::new();
    almanac()
        .args(["-j", "0"])
        .arg(ws.example())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jobs"));
}
