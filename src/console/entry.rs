// SPDX-License-Identifier: MPL-2.0
//! Log line data model.

use std::fmt;

use chrono::{DateTime, Utc};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Uppercase label used in exported lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A log line as handed in by a producer.
///
/// The timestamp is optional; when absent the queue stamps the record at
/// admission. Producers that replay historical output pin it explicitly
/// with [`at`](Self::at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub source: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl LogRecord {
    /// Creates a record to be stamped at admission.
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source: None,
            timestamp: None,
        }
    }

    /// Shorthand for an info-level record.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    /// Shorthand for a warn-level record.
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    /// Shorthand for an error-level record.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Tags the record with its producing subsystem.
    #[must_use]
    pub fn from_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Pins the record to an explicit timestamp.
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A log line after admission: stamped, sequenced and immutable.
///
/// The sequence number is per-queue and strictly increasing in admission
/// order, which is also render and export order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    seq: u64,
    level: LogLevel,
    message: String,
    source: Option<String>,
    timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub(crate) fn admit(record: LogRecord, seq: u64, fallback: DateTime<Utc>) -> Self {
        Self {
            seq,
            level: record.level,
            message: record.message,
            source: record.source,
            timestamp: record.timestamp.unwrap_or(fallback),
        }
    }

    /// Admission sequence number.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Severity level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Producing subsystem, when tagged.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Admission or producer timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Renders the entry as one export line.
    ///
    /// `[2026-08-25T10:15:00.123Z] [WARN] [launcher] low disk space`, with
    /// the source segment omitted for untagged entries.
    #[must_use]
    pub fn format_line(&self) -> String {
        let timestamp = self
            .timestamp
            .format("%Y-%m-%dT%H:%M:%S%.3fZ");
        match &self.source {
            Some(source) => {
                format!("[{timestamp}] [{}] [{source}] {}", self.level, self.message)
            }
            None => format!("[{timestamp}] [{}] {}", self.level, self.message),
        }
    }
}
