use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".checkup-lens";
const LOG_FILE: &str = "activity.log";
const MAX_LOG_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Host the operation ran against, if any.
    pub target: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.level.marker(),
            self.event,
            self.target.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or("")
        )
    }
}

/// Activity log, one line per pipeline operation. Once the file reaches
/// `max_bytes` it is moved to `activity.log.1` (replacing any older backup)
/// and a fresh file is started, so at most two files exist.
pub struct ActivityLogger {
    log_path: PathBuf,
    max_bytes: u64,
}

impl ActivityLogger {
    /// Logger writing to `~/.checkup-lens/activity.log`.
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            crate::CheckupError::Other("could not determine home directory".into())
        })?;
        let app_dir = user_dirs.home_dir().join(APP_DIR);
        fs::create_dir_all(&app_dir)?;
        Ok(Self::at(app_dir.join(LOG_FILE)))
    }

    /// Logger writing to an explicit file.
    pub fn at(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            max_bytes: MAX_LOG_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Where the previous file goes on rotation.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.log_path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    pub fn log(
        &self,
        level: LogLevel,
        target: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            target: target.map(str::to_string),
            event: event.to_string(),
            details: details.map(str::to_string),
        };

        self.rotate_if_full()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{entry}")?;
        Ok(())
    }

    fn rotate_if_full(&self) -> crate::Result<()> {
        match fs::metadata(&self.log_path) {
            Ok(meta) if meta.len() >= self.max_bytes => {
                fs::rename(&self.log_path, self.backup_path())?;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Lines of the current file matching the filters, most recent first.
    pub fn read_logs(
        &self,
        target_filter: Option<&str>,
        errors_only: bool,
    ) -> crate::Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(contents
            .lines()
            .rev()
            .filter(|line| !errors_only || line.contains(LogLevel::Error.marker()))
            .filter(|line| target_filter.map_or(true, |t| line.contains(t)))
            .map(str::to_string)
            .collect())
    }

    pub fn info(&self, target: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Info, target, event, details)
    }

    pub fn error(&self, target: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Error, target, event, details)
    }
}
