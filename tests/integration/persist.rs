use crate::common::{
    make_temp_dir, plain, read_log_contents, read_snapshot, run, write_config, write_snapshot,
};

const SNAPSHOT: &str = r#"{
  "todos": [
    { "todoId": 4, "title": "Report", "content": null,
      "startDate": "2024-05-01", "endDate": "2024-05-03", "completed": false },
    { "todoId": 7, "title": "Thesis", "content": "chapter 2",
      "startDate": "2000-01-01", "endDate": "2024-05-03", "completed": false }
  ],
  "schedules": []
}"#;

#[test]
fn toggle_updates_saved_snapshot_and_keeps_ids() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, SNAPSHOT);
    let output = run(&dir, &["--toggle", "4", "--view", "todos"]);

    assert!(output.status.success(), "stderr: {}", plain(&output.stderr));
    assert!(plain(&output.stdout).contains("[x]"));

    let snapshot = read_snapshot(&dir);
    assert_eq!(snapshot["todos"][0]["todoId"], 4);
    assert_eq!(snapshot["todos"][0]["completed"], true);
    assert_eq!(snapshot["todos"][1]["todoId"], 7);
}

#[test]
fn new_todo_id_follows_highest_loaded_id() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, SNAPSHOT);
    let output = run(&dir, &["--add-todo", "Quiz", "ch 3", "2024-06-01", "2024-06-01"]);

    assert!(output.status.success());
    let snapshot = read_snapshot(&dir);
    assert_eq!(snapshot["todos"][2]["todoId"], 8);
}

#[test]
fn deleting_missing_todo_fails_without_saving() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, SNAPSHOT);
    let output = run(&dir, &["--delete-todo", "9"]);

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("Todo with id 9 not found."));
    assert_eq!(read_snapshot(&dir)["todos"].as_array().unwrap().len(), 2);
}

#[test]
fn oversized_todo_is_skipped_with_warning() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, SNAPSHOT);
    write_config(
        &dir,
        r#"{ "max_span_days": { "value": 30, "description": "span" } }"#,
    );
    let output = run(&dir, &["--view", "calendar", "--month", "2024-05"]);

    assert!(output.status.success());
    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Todo 7 'Thesis' left off the calendar"));
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("2024-05-02 | 1     | Report"));
    assert!(!stdout.contains("Thesis"));
}

#[test]
fn actions_are_logged_to_file() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, SNAPSHOT);
    let output = run(&dir, &["--delete-todo", "7"]);

    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Loaded 2 todo(s) and 0 schedule(s)"));
    assert!(log.contains("INFO  Deleted todo 7."));
    assert!(log.contains("Saved snapshot"));
}

#[test]
fn corrupt_snapshot_aborts() {
    let dir = make_temp_dir("persist");
    write_snapshot(&dir, r#"{ "todos": [ { "title": 3 } ] }"#);
    let output = run(&dir, &[]);

    assert!(!output.status.success());
    assert!(plain(&output.stderr).contains("JSON error"));
}
