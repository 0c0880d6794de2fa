//! CLI integration tests for the example plugin
//!
//! These tests drive the executable the way a host loader would: asking for
//! the manifest, then sending protocol requests over stdin.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the plugin binary, isolated from user config
fn plugin_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("example-plugin"));
    cmd.env("EXAMPLE_PLUGIN_CONFIG", dir.path().join("config.toml"));
    cmd
}

fn responses(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// =============================================================================
// Manifest Tests
// =============================================================================

#[test]
fn test_manifest_prints_descriptor() {
    let dir = TempDir::new().unwrap();

    let output = plugin_cmd(&dir).arg("--manifest").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["name"], "example-plugin");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["author"], "VoltMind Team");
    assert_eq!(json["commands"], serde_json::json!(["greet", "count"]));
    assert_eq!(json["entry_point"], "example-plugin");
}

#[test]
fn test_manifest_ignores_invalid_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[count]\nlimit = 0\n").unwrap();

    plugin_cmd(&dir)
        .arg("--manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"example-plugin\""));
}

// =============================================================================
// Protocol Tests
// =============================================================================

#[test]
fn test_serve_test_operation() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .write_stdin("{\"operation\": \"test\", \"params\": {}}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"success":true,"data":true}"#));
}

#[test]
fn test_serve_greet_keeps_console_off_stdout() {
    let dir = TempDir::new().unwrap();

    let output = plugin_cmd(&dir)
        .write_stdin("{\"operation\": \"greet\", \"params\": {\"name\": \"Ada\", \"style\": \"formal\"}}\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("🤖 Good day, Ada. I hope you are well."))
        .stderr(predicate::str::contains("brought to you by the Example Plugin"));

    let responses = responses(&output.get_output().stdout);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["data"], "Good day, Ada. I hope you are well.");
}

#[test]
fn test_serve_multiple_requests() {
    let dir = TempDir::new().unwrap();
    let input = concat!(
        "{\"operation\": \"count\", \"params\": {\"max\": 150}}\n",
        "{\"operation\": \"count\", \"params\": {\"max\": 0}}\n",
        "{\"operation\": \"dance\"}\n",
        "garbage\n",
    );

    let output = plugin_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("That's a big number! Limiting to 100"))
        .stderr(predicate::str::contains("Please provide a positive number"));

    let responses = responses(&output.get_output().stdout);
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["data"], 100);
    assert_eq!(responses[1]["success"], true);
    assert!(responses[1]["data"].is_null());
    assert_eq!(responses[2]["error"], "Unknown operation: dance");
    assert_eq!(responses[3]["success"], false);
}

#[test]
fn test_serve_empty_input() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Developer Command Tests
// =============================================================================

#[test]
fn test_info_text() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugin: example-plugin"))
        .stdout(predicate::str::contains("Commands: greet, count"));
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();

    let output = plugin_cmd(&dir)
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["name"], "greet");
    assert_eq!(json[1]["name"], "count");
}

#[test]
fn test_call_count_text() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .args(["call", "count", r#"{"max": 3}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔢 Counting to 3:"))
        .stdout(predicate::str::contains("  3"))
        .stdout(predicate::str::contains("✅ Finished counting to 3!"));
}

#[test]
fn test_call_json_result() {
    let dir = TempDir::new().unwrap();

    let output = plugin_cmd(&dir)
        .args(["call", "greet", r#"{"style": "casual"}"#, "-f", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["command"], "greet");
    assert_eq!(json["result"], "Hey Friend! What's up?");
}

#[test]
fn test_call_unknown_command_fails() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .args(["call", "dance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: dance"));
}

#[test]
fn test_call_rejects_non_object_params() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .args(["call", "greet", "[1, 2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[greet]\ndefault_name = \"Team\"\n\n[count]\nlimit = 4\n",
    )
    .unwrap();

    plugin_cmd(&dir)
        .args(["call", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello there, Team! Nice to see you!"));

    plugin_cmd(&dir)
        .args(["call", "count", r#"{"max": 9}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("That's a big number! Limiting to 4"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[count]\nlimit = 0\n").unwrap();

    plugin_cmd(&dir)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    plugin_cmd(&dir)
        .args(["--verbose", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose] Example plugin starting"))
        .stderr(predicate::str::contains(
            "[verbose:config] greet.default_style=friendly, count.limit=100",
        ))
        .stdout(predicate::str::contains("[verbose]").not());
}
