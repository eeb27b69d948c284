use crate::common::{days_from_today, lines, make_temp_dir, plain, read_snapshot, run};

#[test]
fn empty_workspace_renders_tasks_tab() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &[]);

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    let stdout = lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "ASSIGNMENTS"));
    assert!(stdout.iter().any(|l| l == "No assignments."));
    assert!(!dir.join("dayboard.json").exists());
}

#[test]
fn unknown_argument_fails_with_usage() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--bogus"]);

    assert!(!output.status.success());
    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Unknown argument: --bogus"));
    assert!(stderr.contains("Usage: dayboard"));
}

#[test]
fn help_prints_usage() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--help"]);
    assert!(output.status.success());
    assert!(plain(&output.stdout).contains("--add-schedule"));
}

#[test]
fn added_todo_shows_countdown_and_is_saved() {
    let dir = make_temp_dir("cli");
    let start = days_from_today(0);
    let end = days_from_today(3);
    let output = run(&dir, &["--add-todo", "Essay", "first draft", &start, &end]);

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("Essay"));
    assert!(stdout.contains("D-3"));
    assert!(stdout.contains(&format!("{start} ~ {end}")));

    let snapshot = read_snapshot(&dir);
    assert_eq!(snapshot["todos"][0]["todoId"], 1);
    assert_eq!(snapshot["todos"][0]["content"], "first draft");
}

#[test]
fn blank_todo_field_is_rejected_and_nothing_saved() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--add-todo", "Essay", " ", "2024-05-01", "2024-05-02"]);

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("'content' must not be empty."));
    assert!(!dir.join("dayboard.json").exists());
}

#[test]
fn calendar_view_for_requested_month() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--view", "calendar", "--month", "2024-02"]);

    assert!(output.status.success());
    let stdout = lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "CALENDAR 2024-02"));
    assert!(stdout.iter().any(|l| l.starts_with("SUN | MON")));
    assert!(stdout.iter().any(|l| l.contains("| 29 ")));
}

#[test]
fn schedule_added_across_weekdays_fills_timetable() {
    let dir = make_temp_dir("cli");
    let output = run(
        &dir,
        &[
            "--add-schedule",
            "Lab",
            "MON:9-11,THU:13-14",
            "--color",
            "blue",
            "--view",
            "timetable",
        ],
    );

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    let stdout = lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("09:00") && l.contains("Lab")));
    assert!(stdout.iter().any(|l| l.starts_with("13:00") && l.contains("Lab")));

    let snapshot = read_snapshot(&dir);
    let schedules = snapshot["schedules"].as_array().unwrap();
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0]["weekday"], "MON");
    assert_eq!(schedules[1]["weekday"], "THU");
    assert_eq!(schedules[1]["color"], "blue");
}

#[test]
fn schedule_with_inverted_hours_is_rejected() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--add-schedule", "Lab", "MON:11-9"]);

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("must be earlier than end hour"));
    assert!(!dir.join("dayboard.json").exists());
}

#[test]
fn failed_action_keeps_earlier_changes() {
    let dir = make_temp_dir("cli");
    let output = run(
        &dir,
        &["--add-todo", "Essay", "body", "2024-01-01", "2024-01-02", "--toggle", "99"],
    );

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("Todo with id 99 not found."));

    let snapshot = read_snapshot(&dir);
    let todos = snapshot["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Essay");
    assert_eq!(todos[0]["completed"], false);
}
