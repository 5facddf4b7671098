//! Integration tests for the nightfall CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nightfall() -> Command {
    let mut cmd = Command::cargo_bin("nightfall").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn snapshot_json(args: &[&str]) -> serde_json::Value {
    let output = nightfall().arg("snapshot").args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_prints_settlements() {
    nightfall()
        .args(["map", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Settlement")
                .and(predicate::str::contains("Buildings"))
                .and(predicate::str::contains("settlements,")),
        );
}

#[test]
fn map_is_deterministic() {
    let first = nightfall().args(["map", "-s", "11"]).output().unwrap();
    let second = nightfall().args(["map", "-s", "11"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn map_rejects_tiny_sizes() {
    nightfall()
        .args(["map", "--width", "4", "--height", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8x8"));
}

// ---------------------------------------------------------------------------
// interior
// ---------------------------------------------------------------------------

#[test]
fn interior_prints_floors() {
    nightfall()
        .args(["interior", "house"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House").and(predicate::str::contains("Ground Floor")));
}

#[test]
fn interior_accepts_loose_names() {
    nightfall()
        .args(["interior", "police-station", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Police Station"));
}

#[test]
fn interior_unknown_type_fails() {
    nightfall()
        .args(["interior", "castle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown building type: castle"));
}

// ---------------------------------------------------------------------------
// snapshot
// ---------------------------------------------------------------------------

#[test]
fn snapshot_starts_in_the_bunker() {
    let json = snapshot_json(&["--seed", "5"]);
    assert_eq!(json["turn"], 0);
    assert_eq!(json["day"], 1);
    assert_eq!(json["alive"], true);
    assert_eq!(json["building"], "Bunker");
    assert_eq!(json["location"]["Interior"]["floor"], 0);
    assert_eq!(json["stats"]["hp"], 100.0);
    assert_eq!(json["interior_zombies"], 0);
    assert!(json["log"].as_array().is_some_and(|l| !l.is_empty()));
}

#[test]
fn snapshot_reads_a_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nightfall.json");
    fs::write(&path, r#"{ "seed": 9, "initial_zombies": 0 }"#).unwrap();
    let json = snapshot_json(&["--config", path.to_str().unwrap()]);
    assert_eq!(json["world_zombies"], 0);
}

#[test]
fn snapshot_rejects_a_bad_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "turns_per_day": 0 }"#).unwrap();
    nightfall()
        .args(["snapshot", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid config"));
}

#[test]
fn snapshot_missing_config_fails() {
    nightfall()
        .args(["snapshot", "--config", "/nonexistent/nightfall.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_a_summary() {
    nightfall()
        .args(["simulate", "--turns", "40", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("Turns"))
                .and(predicate::str::contains("Kills")),
        );
}

#[test]
fn simulate_log_prints_every_line() {
    nightfall()
        .args(["simulate", "--turns", "10", "--log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message Log").and(predicate::str::contains("bunker")));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_help_and_quit() {
    nightfall()
        .args(["play", "--seed", "2"])
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movement").and(predicate::str::contains("@")));
}

#[test]
fn play_runs_commands_until_eof() {
    nightfall()
        .arg("play")
        .write_stdin("inv\nrest\nn\nn\ne\ne\ne\nretrieve knife\ninv\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You carry nothing.")
                .and(predicate::str::contains("four walls"))
                .and(predicate::str::contains("Knife")),
        );
}

#[test]
fn play_reports_unknown_commands() {
    nightfall()
        .arg("play")
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'dance'"));
}

#[test]
fn play_shows_refusals_in_the_log() {
    nightfall()
        .arg("play")
        .write_stdin("scavenge\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You need to be outside."));
}
