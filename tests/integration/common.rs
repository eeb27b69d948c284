use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Days, Local, NaiveDate};

pub fn binary_path() -> PathBuf {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_dayboard"));
    if raw.is_absolute() {
        return raw;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(raw)
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dayboard-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Runs the binary inside `dir` so its default paths land there.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_from_today(days: u64) -> String {
    today()
        .checked_add_days(Days::new(days))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

pub fn plain(buf: &[u8]) -> String {
    strip_ansi(&String::from_utf8_lossy(buf))
}

pub fn lines(buf: &[u8]) -> Vec<String> {
    plain(buf)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn write_snapshot(dir: &Path, json: &str) {
    fs::write(dir.join("dayboard.json"), json).unwrap();
}

pub fn read_snapshot(dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join("dayboard.json")).expect("snapshot should exist");
    serde_json::from_str(&raw).unwrap()
}

pub fn write_config(dir: &Path, json: &str) {
    fs::write(dir.join("config.json"), json).unwrap();
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
