use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::types::ScrapeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO ",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Sport name or match id the event is about.
    pub subject: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.level.marker(),
            self.event,
            self.subject.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or("")
        )
    }
}

/// Append-only run log, one line per pipeline event.
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Logger writing to `~/.matchscrape/activity.log`.
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            ScrapeError::Config("could not determine home directory".into())
        })?;
        Self::at(user_dirs.home_dir().join(".matchscrape").join("activity.log"))
    }

    pub fn at(log_path: impl Into<PathBuf>) -> crate::Result<Self> {
        let log_path = log_path.into();
        if let Some(dir) = log_path.parent() {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { log_path })
    }

    pub fn log(
        &self,
        level: LogLevel,
        subject: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            subject: subject.map(|s| s.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", entry.to_line())?;
        Ok(())
    }

    /// Matching lines, newest first.
    pub fn read_logs(
        &self,
        subject_filter: Option<&str>,
        errors_only: bool,
    ) -> crate::Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let mut matching = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains(LogLevel::Error.marker()) {
                continue;
            }
            if let Some(subject) = subject_filter {
                if !line.contains(subject) {
                    continue;
                }
            }
            matching.push(line);
        }

        matching.reverse();
        Ok(matching)
    }

    pub fn info(
        &self,
        subject: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        self.log(LogLevel::Info, subject, event, details)
    }

    pub fn error(
        &self,
        subject: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        self.log(LogLevel::Error, subject, event, details)
    }
}
