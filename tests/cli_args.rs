//! Tests for CLI argument parsing.
//!
//! These run the real binary and only cover paths that exit before the
//! terminal UI starts.

mod common;

use common::temp_config;
use std::process::Command;

fn pastesum_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pastesum"))
}

#[test]
fn test_help_lists_options() {
    let output = pastesum_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--model"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--length"));
}

#[test]
fn test_version_flag() {
    let output = pastesum_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_length_is_rejected() {
    let output = pastesum_cmd()
        .arg("--length")
        .arg("enormous")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("enormous"));
    // clap lists the accepted values
    assert!(stderr.contains("short"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = pastesum_cmd()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));
}

#[test]
fn test_invalid_base_url_override_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = pastesum_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--base-url")
        .arg("not-a-url")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
