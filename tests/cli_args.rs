//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn tictactoe_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
}

#[test]
fn test_help_lists_options() {
    let output = tictactoe_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--no-mouse"));
}

#[test]
fn test_version_flag() {
    let output = tictactoe_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_malformed_config_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[symbols\n").expect("Failed to write config");

    let output = tictactoe_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"));
}

#[test]
fn test_missing_config_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.toml");

    let output = tictactoe_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = tictactoe_cmd()
        .arg("--bogus")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
