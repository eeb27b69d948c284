use crate::core::models::{Schedule, Todo};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk form of a [`MemoryStore`](crate::core::store::MemoryStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// A missing file reads as an empty snapshot.
pub fn load_snapshot_or_default(path: &Path) -> Result<Snapshot> {
    if path.exists() {
        load_snapshot(path)
    } else {
        Ok(Snapshot::default())
    }
}
