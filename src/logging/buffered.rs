//! In-memory logger that captures messages for later inspection.
use std::sync::Mutex;

use super::types::Log;

/// Severity or kind of a captured message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// A stage header.
    Stage,
    /// An informational message.
    Info,
    /// A debug message.
    Debug,
    /// A warning.
    Warn,
    /// An error.
    Error,
    /// A dry-run action.
    DryRun,
}

/// A single captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Kind of message.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

/// Implement the methods of [`Log`] by pushing each message into
/// `self.entries` with the matching [`LogLevel`].
macro_rules! buffer_log_methods {
    ($($method:ident => $level:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.push(LogLevel::$level, msg);
            }
        )+
    };
}

/// Logger that keeps messages in memory instead of printing them.
///
/// Useful for embedding the installer in another program, or for asserting
/// on what the installer reported.
///
/// # Examples
///
/// ```
/// use dotlinks_cli::logging::{BufferedLog, Log, LogLevel};
///
/// let log = BufferedLog::new();
/// log.info("linking  a <- b");
/// log.debug("detail");
/// assert_eq!(log.messages(LogLevel::Info), vec!["linking  a <- b"]);
/// ```
#[derive(Debug, Default)]
pub struct BufferedLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLog {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, level: LogLevel, msg: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(LogEntry {
                level,
                message: msg.to_string(),
            });
        }
    }

    /// Return a copy of every captured entry in order.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Return the text of every captured entry at `level`, in order.
    #[must_use]
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }
}

impl Log for BufferedLog {
    buffer_log_methods!(
        stage => Stage,
        info => Info,
        debug => Debug,
        warn => Warn,
        error => Error,
        dry_run => DryRun,
    );
}
