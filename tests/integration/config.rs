use std::fs;

use crate::common::{lines, make_temp_dir, plain, run, write_config};

#[test]
fn calendar_week_start_from_config() {
    let dir = make_temp_dir("config");
    write_config(
        &dir,
        r#"{ "calendar_week_start": { "value": "monday", "description": "calendar" } }"#,
    );
    let output = run(&dir, &["--view", "calendar", "--month", "2024-09"]);

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    let stdout = lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("MON | TUE")));
    // 2024-09-01 is a Sunday, so the first Monday-first week ends with it
    let first_week = stdout
        .iter()
        .position(|l| l.starts_with("MON | TUE"))
        .map(|i| &stdout[i + 2])
        .unwrap();
    let cells: Vec<&str> = first_week.split('|').map(str::trim).collect();
    assert_eq!(cells, vec!["", "", "", "", "", "", "1"]);
}

#[test]
fn display_hours_from_config_limit_timetable_rows() {
    let dir = make_temp_dir("config");
    write_config(
        &dir,
        r#"{ "display_hours": { "value": "8-10", "description": "hours" } }"#,
    );
    let output = run(&dir, &["--view", "timetable"]);

    assert!(output.status.success());
    let stdout = lines(&output.stdout);
    let hours: Vec<_> = stdout
        .iter()
        .filter_map(|l| l.get(..5))
        .filter(|h| h.ends_with(":00"))
        .collect();
    assert_eq!(hours, vec!["08:00", "09:00", "10:00"]);
}

#[test]
fn invalid_config_aborts() {
    let dir = make_temp_dir("config");
    write_config(&dir, "{ not json");
    let output = run(&dir, &[]);

    assert!(!output.status.success());
    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Failed to load planner state"));
    assert!(stderr.contains("Invalid JSON"));
}

#[test]
fn disabled_file_logging_writes_no_log() {
    let dir = make_temp_dir("config");
    write_config(
        &dir,
        r#"{ "file_logging_enabled": { "value": "False", "description": "logs" } }"#,
    );
    let output = run(&dir, &["--add-todo", "a", "b", "2024-01-01", "2024-01-02"]);

    assert!(output.status.success());
    assert!(!dir.join("logs").exists());
}

#[test]
fn set_config_writes_file_and_config_view_shows_it() {
    let dir = make_temp_dir("config");
    let output = run(&dir, &["--set-config", "MAX_SPAN_DAYS", "90", "--view", "config"]);

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    let stdout = lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "CONFIG"));
    let row: Vec<String> = stdout
        .iter()
        .find(|l| l.contains("MAX_SPAN_DAYS"))
        .map(|l| l.split('|').map(|c| c.trim().to_string()).collect())
        .unwrap();
    assert_eq!(row.last().map(String::as_str), Some("90"));

    let raw = fs::read_to_string(dir.join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["max_span_days"]["value"], 90);
    assert!(!dir.join("dayboard.json").exists());
}

#[test]
fn set_config_rejects_unknown_key() {
    let dir = make_temp_dir("config");
    let output = run(&dir, &["--set-config", "NOPE", "1"]);

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("Unknown configuration key 'NOPE'"));
    assert!(!dir.join("config.json").exists());
}
