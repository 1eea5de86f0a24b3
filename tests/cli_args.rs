//! Tests for the binary's argument handling.
//!
//! These run the actual binary and inspect its exit status and output.

use std::process::Command;

fn stryker_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stryker"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn snapshot(args: &[&str]) -> serde_json::Value {
    let output = stryker_cmd()
        .args(args)
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_help_shows_options() {
    let output = stryker_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--concurrency <number>"));
    assert!(stdout.contains("--config-file <file-path>"));
    assert!(stdout.contains("--since[:<comittish>]"), "{stdout}");
    assert!(stdout.contains("--init[:<file-path>]"), "{stdout}");
}

#[test]
fn test_snapshot_contains_supplied_values() {
    let json = snapshot(&["-c", "4", "--since:abc123", "-r", "html", "-r", "json"]);

    assert_eq!(json["config_file"], "stryker-config.json");
    assert!(json["init"].is_null());
    assert_eq!(json["inputs"]["concurrency"]["value"], 4);
    assert_eq!(json["inputs"]["since"]["value"], true);
    assert_eq!(json["inputs"]["since-target"]["value"], "abc123");
    assert_eq!(json["inputs"]["reporters"]["value"], serde_json::json!(["html", "json"]));
    assert_eq!(json["inputs"]["dev-mode"]["supplied"], false);
}

#[test]
fn test_init_without_path() {
    let json = snapshot(&["--init"]);
    assert!(json["init"].is_object());
    assert!(json["init"]["output_path"].is_null());
}

#[test]
fn test_invalid_integer_exits_with_error() {
    let output = stryker_cmd()
        .arg("--concurrency")
        .arg("lots")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unexpected value for argument concurrency:lots. Expected type to be integer"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_missing_value_shows_error() {
    let output = stryker_cmd()
        .arg("--solution")
        .output()
        .expect("Failed to execute command");

    // clap should show an error about missing value
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = stryker_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-such-flag"));
}
