//! The [`Log`] trait shared by every logging backend.

/// Abstraction over logging backends.
///
/// Both [`Logger`](super::logger::Logger) (immediate output through
/// `tracing`) and [`BufferedLog`](super::buffered::BufferedLog) (in-memory
/// capture) implement this trait, so installer code can report progress
/// without knowing where the output goes.
#[cfg_attr(test, mockall::automock)]
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
}
