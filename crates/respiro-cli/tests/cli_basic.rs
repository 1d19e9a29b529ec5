//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. All runs
//! use the dev settings directory (RESPIRO_ENV=dev) to stay clear of a
//! real installation.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "respiro-cli", "--"])
        .args(args)
        .env("RESPIRO_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_welcome_without_subcommand() {
    let (stdout, _, code) = run_cli(&[]);
    assert_eq!(code, 0, "welcome failed");
    assert!(stdout.contains("respiro session"));
}

#[test]
fn test_settings_list_is_json() {
    let (stdout, _, code) = run_cli(&["settings", "list"]);
    assert_eq!(code, 0, "settings list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("settings list is not JSON");
    assert!(parsed.get("language").is_some());
    assert!(parsed.get("sound").is_some());
}

#[test]
fn test_settings_get_language() {
    let (stdout, _, code) = run_cli(&["settings", "get", "language"]);
    assert_eq!(code, 0, "settings get failed");
    let value = stdout.trim();
    assert!(value == "en" || value == "tr", "unexpected language: {value}");
}

#[test]
fn test_settings_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["settings", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_settings_set_roundtrip_and_reset() {
    let (stdout, _, code) = run_cli(&["settings", "set", "sound.background", "forest"]);
    assert_eq!(code, 0, "settings set failed");
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(&["settings", "get", "sound.background"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "forest");

    let (_, _, code) = run_cli(&["settings", "reset"]);
    assert_eq!(code, 0, "settings reset failed");
}

#[test]
fn test_settings_set_rejects_invalid_sound() {
    let (_, _, code) = run_cli(&["settings", "set", "sound.background", "rainfall"]);
    assert_ne!(code, 0);
}

#[test]
fn test_reminder_status() {
    let (stdout, _, code) = run_cli(&["reminder", "status"]);
    assert_eq!(code, 0, "reminder status failed");
    assert!(stdout.contains("enabled") || stdout.contains("disabled"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("respiro"));
}
