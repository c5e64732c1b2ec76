//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test uses
//! its own config directory so runs never touch the user's settings.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create test directory")
}

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "taqwim-cli", "--"])
        .args(args)
        .env("TAQWIM_CONFIG_DIR", config_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_convert_json() {
    let dir = test_dir();
    let (code, stdout, _) = run_cli(dir.path(), &["convert", "2025-08-01", "--json"]);
    assert_eq!(code, 0, "convert failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["julian_day"], 2460889);
    assert_eq!(parsed["weekday"], "Friday");
    assert_eq!(parsed["hijri"]["month"], 2);
    assert_eq!(parsed["hijri"]["day"], 8);
    assert_eq!(parsed["hijri"]["year"], 1447);
}

#[test]
fn test_convert_rejects_invalid_date() {
    let dir = test_dir();
    let (code, _, _) = run_cli(dir.path(), &["convert", "2025-02-30"]);
    assert_ne!(code, 0);
}

#[test]
fn test_conflict_friday_prayer() {
    let dir = test_dir();
    let (code, stdout, _) = run_cli(dir.path(), &["conflict", "2025-08-01", "12:15"]);
    assert_eq!(code, 0, "conflict failed");
    assert!(stdout.contains("conflict: Overlaps Friday prayer"));

    let (code, stdout, _) = run_cli(dir.path(), &["conflict", "2025-08-05", "10:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("no conflict"));
}

#[test]
fn test_conflict_rejects_malformed_time() {
    let dir = test_dir();
    let (code, _, _) = run_cli(dir.path(), &["conflict", "2025-08-01", "12h15"]);
    assert_ne!(code, 0);
}

#[test]
fn test_holiday_check() {
    let dir = test_dir();
    let (code, stdout, _) = run_cli(dir.path(), &["holiday", "check", "2025-09-23"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("National Day"));

    let (code, stdout, _) = run_cli(dir.path(), &["holiday", "check", "2025-09-24"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not a holiday"));
}

#[test]
fn test_holiday_list_json() {
    let dir = test_dir();
    let (code, stdout, _) = run_cli(dir.path(), &["holiday", "list", "2025", "6", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["date"], "2025-06-04");
    assert_eq!(entries[0]["label"], "Eid al-Adha");
}

#[test]
fn test_month_with_events() {
    let dir = test_dir();
    let events = dir.path().join("events.json");
    std::fs::write(
        &events,
        r#"[{"date": "2025-08-01", "time": "12:15", "title": "Algorithms", "type": "lecture"}]"#,
    )
    .unwrap();

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["month", "2025", "8", "--events", events.to_str().unwrap(), "--json"],
    );
    assert_eq!(code, 0, "month failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["weeks"].as_array().unwrap().len(), 6);
    let friday = &parsed["weeks"][0][5];
    assert_eq!(friday["date"], "2025-08-01");
    assert_eq!(friday["events"][0]["conflict"]["window_label"], "Friday prayer");
}

#[test]
fn test_check_reports_conflicts() {
    let dir = test_dir();
    let events = dir.path().join("events.json");
    std::fs::write(
        &events,
        r#"[
            {"date": "2025-08-01", "time": "12:15", "title": "Algorithms"},
            {"date": "2025-08-05", "time": "10:00", "title": "Tutorial"}
        ]"#,
    )
    .unwrap();

    let (code, stdout, _) = run_cli(dir.path(), &["check", "--events", events.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("2 event(s), 1 conflict(s)"));
}

#[test]
fn test_config_set_and_get() {
    let dir = test_dir();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "hijri.year_mode"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "derived");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "hijri.year_mode", "pinned"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "hijri.year_mode"]);
    assert_eq!(stdout.trim(), "pinned");

    // Pinned year shows on any date.
    let (_, stdout, _) = run_cli(dir.path(), &["convert", "2000-01-01", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["hijri"]["year"], 1447);

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "calendar.week_starts_on", "9"]);
    assert_ne!(code, 0);

    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
}

#[test]
fn test_config_get_unknown_key() {
    let dir = test_dir();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "ui.dark_mode"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = test_dir();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[[fixed_holidays]]
month = 2
day = 30
label = "Typo"

[[conflict_windows]]
weekday = 1
start = "09:00"
end = "11:00"
label = "Faculty council"
"#,
    )
    .unwrap();

    let (code, stdout, stderr) = run_cli(dir.path(), &["conflict", "2025-08-04", "10:00"]);
    assert_ne!(code, 0, "invalid config must not fall back to defaults");
    assert!(stdout.is_empty());
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("Typo"));
}

#[test]
fn test_convert_rejects_unpadded_date() {
    let dir = test_dir();
    let (code, _, _) = run_cli(dir.path(), &["convert", "2025-8-1"]);
    assert_ne!(code, 0);
}
