
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);
}

/// Info goes to stdout, warnings and errors to stderr.
struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        }
    }
}

struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    fn open(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("dayboard-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn log(&self, _level: LogLevel, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// The log file is opened on the first file-targeted message, once. If that
/// fails the logger keeps going console-only.
struct LazyFile {
    dir: PathBuf,
    opened: Option<(Arc<dyn LogSink>, PathBuf)>,
    attempted: bool,
}

impl LazyFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            opened: None,
            attempted: false,
        }
    }

    fn sink(&mut self) -> Option<Arc<dyn LogSink>> {
        if !self.attempted {
            self.attempted = true;
            match FileSink::open(&self.dir) {
                Ok((sink, path)) => self.opened = Some((Arc::new(sink), path)),
                Err(err) => {
                    eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})")
                }
            }
        }
        self.opened.as_ref().map(|(sink, _)| sink.clone())
    }
}

#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn LogSink>,
    file: Arc<Mutex<LazyFile>>,
    file_enabled: Arc<AtomicBool>,
    console_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger writing files under `./logs`.
    pub fn new() -> Self {
        Self::with_log_dir("logs")
    }

    pub fn with_log_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            console: Arc::new(ConsoleSink),
            file: Arc::new(Mutex::new(LazyFile::new(dir.as_ref().to_path_buf()))),
            file_enabled: Arc::new(AtomicBool::new(true)),
            console_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
            && self.console_enabled.load(Ordering::SeqCst)
        {
            self.console.log(level, message);
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            let sink = self.file.lock().ok().and_then(|mut f| f.sink());
            if let Some(sink) = sink {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                sink.log(level, &format!("[{timestamp}] {:<5} {message}", level.to_string()));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Silences console output; file output is unaffected.
    pub fn set_console_enabled(&self, enabled: bool) {
        self.console_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Only takes effect before the log file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut file) = self.file.lock() {
            if !file.attempted {
                file.dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file.lock().ok().map(|f| f.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file
            .lock()
            .ok()
            .and_then(|f| f.opened.as_ref().map(|(_, path)| path.clone()))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir())
            .field("log_path", &self.log_path())
            .finish()
    }
}
