//! End-to-end tests for the pomodoro binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomodoro(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("POMODORO_CONFIG")
        .arg("--config")
        .arg(dir.path().join("config.yaml"));
    cmd
}

#[test]
fn test_simulate_reaches_break() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["simulate", "--ticks", "1501", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phase\": \"on_break\""))
        .stdout(predicate::str::contains("\"remaining_seconds\": 300"));
}

#[test]
fn test_simulate_pretty_lists_transition() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["simulate", "--focus", "5", "--break", "1", "--ticks", "301"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focusing -> On Break"))
        .stdout(predicate::str::contains("On Break for 01:00 minutes"));
}

#[test]
fn test_simulate_stop_returns_to_idle() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["-o", "json", "simulate", "--ticks", "10", "--stop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phase\": \"idle\""))
        .stdout(predicate::str::contains("\"session\": null"));
}

#[test]
fn test_simulate_rejects_bad_pause() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["simulate", "--ticks", "3", "--pause-after", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pause-after"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.yaml").exists());

    pomodoro(&dir)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": true"))
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}

#[test]
fn test_config_values_drive_simulation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "timer:\n  focus_minutes: 10\n",
    )
    .unwrap();

    pomodoro(&dir)
        .args(["simulate", "--ticks", "0", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remaining_seconds\": 600"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "timer:\n  break_bounds: { min: 9, max: 3, step: 1 }\n",
    )
    .unwrap();

    pomodoro(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timer.break_bounds"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    pomodoro(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}
