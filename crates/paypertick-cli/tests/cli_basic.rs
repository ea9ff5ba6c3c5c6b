//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway config directory and
//! verify outputs.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with `home` as the config directory and return output.
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_paypertick"))
        .args(args)
        .env("PAYPERTICK_HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_status_at_fixed_time() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["status", "--at", "15:00"]);
    assert_eq!(code, 0, "status failed");
    assert!(stdout.starts_with("Today: ¥272.73"));
    assert!(stdout.contains("3h 0m until the end of the day"));
}

#[test]
fn test_status_json() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["status", "--at", "19:00", "--json"]);
    assert_eq!(code, 0, "status --json failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["type"], "EarningsSnapshot");
    assert_eq!(parsed["result"]["phase"], "overtime");
    assert_eq!(parsed["result"]["overtime_minutes"], 60);
    assert_eq!(parsed["result"]["completed_work_minutes"], 450);
}

#[test]
fn test_status_rejects_bad_time() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["status", "--at", "noon"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid --at"));
}

#[test]
fn test_first_run_writes_default_config() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&home, &["status", "--at", "10:00"]);
    assert_eq!(code, 0);
    assert!(home.path().join("config.toml").exists());
}

#[test]
fn test_config_set_get() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "set", "work.end_time", "17:30"]);
    assert_eq!(code, 0, "config set failed");
    assert!(stdout.starts_with("ok"));

    let (code, stdout, _) = run_cli(&home, &["config", "get", "work.end_time"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "17:30");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "set", "work.bonus", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn test_config_list_and_reset() {
    let home = TempDir::new().unwrap();
    run_cli(&home, &["config", "set", "work.currency", "EUR"]);

    let (code, stdout, _) = run_cli(&home, &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("work.currency = EUR"));

    let (code, _, _) = run_cli(&home, &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&home, &["config", "get", "work.currency"]);
    assert_eq!(stdout.trim(), "CNY");
}

#[test]
fn test_invalid_schedule_shows_fallback() {
    let home = TempDir::new().unwrap();
    run_cli(&home, &["config", "set", "work.monthly_work_days", "0"]);

    let (code, stdout, _) = run_cli(&home, &["status", "--at", "10:00"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Salary: not configured"));
    assert!(stdout.contains("monthly_work_days"));
}

#[test]
fn test_details() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["details", "--at", "15:00"]);
    assert_eq!(code, 0, "details failed");
    assert!(stdout.contains("Daily salary: ¥454.55"));
    assert!(stdout.contains("Progress today: 60.0%"));
    assert!(stdout.contains("Effective work time: 4h 30m"));
    assert!(stdout.contains("Phase: afternoon"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("paypertick"));
}
