//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway config directory and
//! verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    run_cli_with_stdin(config_dir, args, "")
}

fn run_cli_with_stdin(config_dir: &TempDir, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sprintpoints"))
        .args(args)
        .env("SPRINTPOINTS_CONFIG_DIR", config_dir.path())
        .env_remove("SPRINTPOINTS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_calc_defaults_table() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["calc"]);
    assert_eq!(code, 0, "calc failed");
    assert!(stdout.contains("Sprint total"));
    assert!(stdout.contains("128"));
}

#[test]
fn test_calc_json_with_holidays() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["calc", "--holidays", "2", "--json"]);
    assert_eq!(code, 0, "calc --json failed");
    let report = parse_json(&stdout);
    assert_eq!(report["platforms"]["web"]["holiday_impact"], 10);
    assert_eq!(report["platforms"]["web"]["story_points"], 32);
    assert_eq!(report["summary"]["total_story_points"], 102);
}

#[test]
fn test_calc_clamps_bad_input() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        &dir,
        &["calc", "--business-days", "-4", "--set", "web.engineers=abc", "--json"],
    );
    assert_eq!(code, 0, "clamping must not fail");
    let report = parse_json(&stdout);
    assert_eq!(report["parameters"]["business_days"], 1);
    assert_eq!(report["platforms"]["web"]["engineers"], 0);
    assert_eq!(report["summary"]["total_story_points"], 88);
}

#[test]
fn test_calc_rejects_unknown_platform() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["calc", "--set", "desktop.engineers=2"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown platform: desktop"));
}

#[test]
fn test_session_reports_running_total() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_cli_with_stdin(
        &dir,
        &["session"],
        "ios.leave_days 70\nbogus.field 1\nquit\n",
    );
    assert_eq!(code, 0, "session failed");
    assert_eq!(stdout.trim(), "ios.leave_days = 70  total: 80");
    assert!(stderr.contains("unknown platform: bogus"));
}

#[test]
fn test_platforms_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["platforms", "--json"]);
    assert_eq!(code, 0, "platforms failed");
    let platforms = parse_json(&stdout);
    assert_eq!(platforms["ios"]["engineers"], 6);
    assert_eq!(platforms["android"]["name"], "Android");
}

#[test]
fn test_config_set_then_calc() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["config", "set", "platforms.web.engineers", "2"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(&dir, &["config", "get", "platforms.web.engineers"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "2");

    let (stdout, _, _) = run_cli(&dir, &["calc", "--json"]);
    assert_eq!(parse_json(&stdout)["summary"]["total_story_points"], 104);
}

#[test]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["config", "get", "sprint.velocity"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_reset_and_path() {
    let dir = TempDir::new().unwrap();
    let _ = run_cli(&dir, &["config", "set", "sprint.holiday_days", "4"]);
    let (stdout, _, code) = run_cli(&dir, &["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
    assert!(stdout.contains("defaults"));

    let (stdout, _, _) = run_cli(&dir, &["config", "get", "sprint.holiday_days"]);
    assert_eq!(stdout.trim(), "0");

    let (stdout, _, code) = run_cli(&dir, &["config", "path"]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("sprintpoints"));
}
