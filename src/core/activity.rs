//! Append-only activity log.
//!
//! One line per state-changing operation in the format
//! `YYYY-MM-DD HH:MM:SS [LEVEL] message`, shared with the local web
//! console. Appends never abort the caller's primary operation: use
//! [`ActivityLog::record`] for best-effort logging.

use std::fs::OpenOptions;
use std::io::Write;

use tracing::warn;

use crate::core::settings::Settings;
use crate::error::{Result, StoreError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log entry severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Level::Info),
            "SUCCESS" => Some(Level::Success),
            "WARNING" => Some(Level::Warning),
            "ERROR" => Some(Level::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed activity log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

/// The append-only activity log backed by `activity.log`.
pub struct ActivityLog<'a> {
    settings: &'a Settings,
}

impl<'a> ActivityLog<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Append one timestamped entry.
    pub fn append(&self, level: Level, message: &str) -> Result<()> {
        self.settings.ensure_dir()?;
        let path = self.settings.activity_log();

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let line = format!("{timestamp} [{level}] {message}\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| StoreError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;
        file.write_all(line.as_bytes())
            .map_err(|source| StoreError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;

        Ok(())
    }

    /// Best-effort append: a log write failure is reported via
    /// `tracing` but never propagated to the caller.
    pub fn record(&self, level: Level, message: &str) {
        if let Err(e) = self.append(level, message) {
            warn!("failed to record activity: {e}");
        }
    }

    /// The most recent `limit` entries, newest first.
    ///
    /// Malformed lines are skipped rather than aborting the read.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let path = self.settings.activity_log();
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: path.display().to_string(),
                    source,
                }
                .into())
            }
        };

        let mut entries: Vec<LogEntry> = contents.lines().filter_map(parse_line).collect();
        if entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        entries.reverse();
        Ok(entries)
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS [LEVEL] message`, returning `None` for
/// anything that does not match.
fn parse_line(line: &str) -> Option<LogEntry> {
    let open = line.find(" [")?;
    let (timestamp, rest) = line.split_at(open);
    let rest = &rest[2..];
    let close = rest.find("] ")?;
    let level = Level::parse(&rest[..close])?;
    let message = &rest[close + 2..];

    if timestamp.is_empty() || message.is_empty() {
        return None;
    }

    Some(LogEntry {
        timestamp: timestamp.to_string(),
        level,
        message: message.to_string(),
    })
}
