//! Logging infrastructure: the [`Log`] trait, its backends, and verbosity tiers.

mod buffered;
mod logger;
mod subscriber;
mod types;
mod verbosity;

pub use buffered::{BufferedLog, LogEntry, LogLevel};
pub use logger::Logger;
pub use subscriber::{LOG_ENV, init_subscriber};
#[cfg(test)]
pub use types::MockLog;
pub use types::Log;
pub use verbosity::Verbosity;
