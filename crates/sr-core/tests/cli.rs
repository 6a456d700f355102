//! CLI end-to-end tests for the `sortreplay` binary.
//!
//! Validates:
//! - `trace` JSON output for a known input
//! - Bad algorithm, speed and size values exit with code 10
//! - Bad input arrays exit with code 11
//! - `play --instant` output in text and JSON
//! - Config file and environment layering through the binary

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::time::Duration;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Helpers
// ============================================================================

/// Command isolated from the host's config and SORTREPLAY_* variables.
fn sortreplay(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sortreplay");
    cmd.timeout(Duration::from_secs(60))
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    for key in [
        "SORTREPLAY_CONFIG",
        "SORTREPLAY_PRESET",
        "SORTREPLAY_ALGORITHM",
        "SORTREPLAY_SPEED_MS",
        "SORTREPLAY_SIZE",
        "SORTREPLAY_SEED",
        "SORTREPLAY_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("parse JSON")
}

// ============================================================================
// trace
// ============================================================================

#[test]
fn test_trace_json_bubble() {
    let home = tempdir().unwrap();
    let doc = stdout_json(sortreplay(&home).args([
        "trace", "--input", "5,3,1", "--algorithm", "bubble", "--format", "json",
    ]));

    let steps = doc["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 8);
    assert_eq!(steps[0]["arr"], serde_json::json!([5, 3, 1]));
    assert_eq!(steps[7]["arr"], serde_json::json!([1, 3, 5]));
    assert_eq!(doc["totals"]["compares"], 3);
    assert_eq!(doc["totals"]["swaps"], 3);
}

#[test]
fn test_trace_summary_default() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["trace", "--input", "2 1", "--algorithm", "merge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merge Sort (2 values)"))
        .stdout(predicate::str::contains("sorted:   [1, 2]"));
}

#[test]
fn test_trace_seeded_is_reproducible() {
    let home = tempdir().unwrap();
    let args = ["trace", "--size", "20", "--seed", "99", "--format", "json"];
    let first = stdout_json(sortreplay(&home).args(args));
    let second = stdout_json(sortreplay(&home).args(args));
    assert_eq!(first["input"], second["input"]);
    assert_eq!(first["input"].as_array().unwrap().len(), 20);
}

#[test]
fn test_trace_jsonl_line_count() {
    let home = tempdir().unwrap();
    let output = sortreplay(&home)
        .args(["trace", "--input", "5,3,1", "--format", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    // header plus eight steps
    assert_eq!(text.lines().count(), 9);
}

// ============================================================================
// Error exit codes
// ============================================================================

#[test]
fn test_unknown_algorithm_env_exits_10() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .env("SORTREPLAY_ALGORITHM", "bogo")
        .args(["trace", "--input", "1,2"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("bogo"));
}

#[test]
fn test_unknown_algorithm_flag_exits_10() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["trace", "--algorithm", "bogo"])
        .assert()
        .code(10);
}

#[test]
fn test_speed_out_of_range_exits_10() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["play", "--instant", "--input", "2,1", "--speed", "5"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("speed_ms"));
}

#[test]
fn test_non_finite_size_exits_10() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["trace", "--size", "NaN"])
        .assert()
        .code(10);
}

#[test]
fn test_bad_input_exits_11() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["trace", "--input", "5,x,1"])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("'x'"));
}

#[test]
fn test_missing_config_file_exits_10() {
    let home = tempdir().unwrap();
    let missing = home.path().join("nope.toml");
    sortreplay(&home)
        .args(["--config", missing.to_str().unwrap(), "config"])
        .assert()
        .code(10);
}

// ============================================================================
// play
// ============================================================================

#[test]
fn test_play_instant_text() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["play", "--instant", "--input", "5,3,1", "--speed", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8/8"))
        .stdout(predicate::str::contains("finished at step 8 after 8 ticks (400 ms)"));
}

#[test]
fn test_play_instant_json_snapshots() {
    let home = tempdir().unwrap();
    let output = sortreplay(&home)
        .args(["play", "--instant", "--json", "--input", "5,3,1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let frames: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("snapshot line"))
        .collect();

    assert_eq!(frames.len(), 8);
    assert_eq!(frames[0]["cursor"], 0);
    assert_eq!(frames[7]["cursor"], 7);
    assert_eq!(frames[7]["progress"]["swaps"], 3);
    assert_eq!(frames[7]["step"]["arr"], serde_json::json!([1, 3, 5]));
}

// ============================================================================
// compare and config
// ============================================================================

#[test]
fn test_compare_json_rows() {
    let home = tempdir().unwrap();
    let rows = stdout_json(sortreplay(&home).args(["compare", "--input", "4,3,2,1", "--format", "json"]));
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4]["algorithm"], "merge");
    assert_eq!(rows[4]["swaps"], 8);
}

#[test]
fn test_config_file_and_env_layering() {
    let home = tempdir().unwrap();
    let path = home.path().join("replay.toml");
    fs::write(&path, "algorithm = \"quick\"\nspeed_ms = 150\n").unwrap();

    let config = stdout_json(
        sortreplay(&home)
            .env("SORTREPLAY_SPEED_MS", "30")
            .args(["--config", path.to_str().unwrap(), "config", "--format", "json"]),
    );
    assert_eq!(config["algorithm"], "quick");
    assert_eq!(config["speed_ms"], 30);
}

#[test]
fn test_config_presets_listing() {
    let home = tempdir().unwrap();
    sortreplay(&home)
        .args(["config", "--presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classroom"))
        .stdout(predicate::str::contains("stress"));
}

#[test]
fn test_help_exits_clean() {
    let home = tempdir().unwrap();
    sortreplay(&home).arg("--help").assert().success();
}
