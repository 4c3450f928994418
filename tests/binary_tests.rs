// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn botstats(home: &Path, data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_botstats"))
        .args(args)
        .arg("--data-dir")
        .arg(data_dir)
        .env("BOTSTATS_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("botstats binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A regular file standing where the data directory should be
fn blocked_data_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    let blocker = temp_dir.path().join("data");
    std::fs::write(&blocker, "not a directory").unwrap();
    blocker
}

#[test]
fn test_simulate_prints_summary_line() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    let output = botstats(temp_dir.path(), &data_dir, &["simulate"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let line = out.trim();
    assert!(line.starts_with("Simulated conversation: "), "got {:?}", line);
    assert!(line.ends_with("/5"), "got {:?}", line);
    assert_eq!(out.lines().count(), 1);
    assert!(data_dir.join("bot_stats.json").is_file());
}

#[test]
fn test_simulate_write_failure_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = blocked_data_dir(&temp_dir);

    let output = botstats(temp_dir.path(), &data_dir, &["simulate"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("Simulated conversation"));
}

#[test]
fn test_generate_stats_prints_summary_line() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    let output = botstats(temp_dir.path(), &data_dir, &["generate-stats"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Successfully generated bot stats for "));
    assert!(data_dir.join("daily_stats.json").is_file());
}

#[test]
fn test_generate_stats_write_failure_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = blocked_data_dir(&temp_dir);

    let output = botstats(temp_dir.path(), &data_dir, &["generate-stats"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error generating stats: "));
}

#[test]
fn test_show_after_simulate() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    botstats(temp_dir.path(), &data_dir, &["simulate"]);
    let output = botstats(temp_dir.path(), &data_dir, &["show"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("1 sessions, average satisfaction "));
}

#[test]
fn test_rust_log_enables_debug_events() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    let output = Command::new(env!("CARGO_BIN_EXE_botstats"))
        .arg("simulate")
        .arg("--data-dir")
        .arg(&data_dir)
        .env("BOTSTATS_HOME", temp_dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("botstats binary runs");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("persisted history"), "stderr: {}", stderr);
}
