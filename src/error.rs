//! Domain-specific error types for the link installer.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Library code returns typed errors ([`InstallError`], [`ConfigError`])
//! while the command layer converts them to [`anyhow::Error`] via the
//! standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! InstallError
//! ├── Containment          — a resolved path escapes its root
//! ├── MissingSource        — a link source does not exist
//! ├── NothingToBackUp      — backup requested for an empty path
//! ├── BackupNamesExhausted — every `.bkp_<N>` slot is taken
//! ├── HomeUnavailable      — `~` used but no home directory is known
//! └── Io                   — filesystem operation failure
//! ConfigError
//! ├── Read                 — mapping file could not be read
//! └── Parse                — mapping file is not a valid mapping
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of a link a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// Where the link is created.
    Destination,
    /// What the link points to.
    Source,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destination => f.write_str("destination"),
            Self::Source => f.write_str("source"),
        }
    }
}

/// Errors that arise while validating or installing links.
#[derive(Error, Debug)]
pub enum InstallError {
    /// A resolved path is not strictly inside its root directory.
    #[error("{role} {path} is not inside {root}")]
    Containment {
        /// Whether the offending path is a destination or a source.
        role: PathRole,
        /// The resolved path that escaped.
        path: PathBuf,
        /// The root it was required to stay under.
        root: PathBuf,
    },

    /// The declared source of a link does not exist.
    #[error("source {path} not found")]
    MissingSource {
        /// Resolved source path.
        path: PathBuf,
    },

    /// A backup was requested for a path with nothing at it.
    ///
    /// Callers check existence first, so this indicates a logic error.
    #[error("cannot back up {path}: nothing exists there")]
    NothingToBackUp {
        /// The path that was expected to exist.
        path: PathBuf,
    },

    /// No unused `.bkp_<N>` name is left for this path.
    #[error("no free backup name left for {path}")]
    BackupNamesExhausted {
        /// The path that could not be backed up.
        path: PathBuf,
    },

    /// A destination uses `~` but the home directory cannot be determined.
    #[error("cannot expand {path}: home directory is unknown")]
    HomeUnavailable {
        /// The destination as declared.
        path: PathBuf,
    },

    /// A filesystem operation failed.
    #[error("{operation} {path}: {source}")]
    Io {
        /// Short name of the operation (e.g. `"rename"`).
        operation: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    /// Build a closure that wraps an [`io::Error`] with operation context,
    /// for use with [`Result::map_err`].
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            operation,
            path,
            source,
        }
    }
}

/// Errors that arise from loading the mapping file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The mapping file could not be read.
    #[error("IO error reading mapping file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The mapping file is not valid TOML or holds non-string values.
    #[error("invalid mapping file {path}: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::path::Path;

    // -----------------------------------------------------------------------
    // InstallError
    // -----------------------------------------------------------------------

    #[test]
    fn containment_display_names_path_and_root() {
        let e = InstallError::Containment {
            role: PathRole::Destination,
            path: PathBuf::from("/home/user/../escape"),
            root: PathBuf::from("/home/user"),
        };
        assert_eq!(
            e.to_string(),
            "destination /home/user/../escape is not inside /home/user"
        );
    }

    #[test]
    fn containment_display_for_source() {
        let e = InstallError::Containment {
            role: PathRole::Source,
            path: PathBuf::from("/etc/passwd"),
            root: PathBuf::from("/repo"),
        };
        assert!(e.to_string().starts_with("source /etc/passwd"));
    }

    #[test]
    fn missing_source_display() {
        let e = InstallError::MissingSource {
            path: PathBuf::from("/repo/bashrc"),
        };
        assert_eq!(e.to_string(), "source /repo/bashrc not found");
    }

    #[test]
    fn nothing_to_back_up_display() {
        let e = InstallError::NothingToBackUp {
            path: PathBuf::from("/home/user/.vimrc"),
        };
        assert!(e.to_string().contains("/home/user/.vimrc"));
    }

    #[test]
    fn io_helper_keeps_operation_path_and_source() {
        let wrap = InstallError::io("rename", Path::new("/home/user/.bashrc"));
        let e = wrap(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(e.to_string().starts_with("rename /home/user/.bashrc"));
        assert!(e.source().is_some());
        assert!(matches!(e, InstallError::Io { operation: "rename", .. }));
    }

    // -----------------------------------------------------------------------
    // ConfigError
    // -----------------------------------------------------------------------

    #[test]
    fn config_read_display_and_source() {
        let e = ConfigError::Read {
            path: PathBuf::from("/repo/locations.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("/repo/locations.toml"));
        assert!(e.source().is_some());
    }

    #[test]
    fn config_parse_has_source() {
        let source = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let e = ConfigError::Parse {
            path: PathBuf::from("locations.toml"),
            source,
        };
        assert!(e.to_string().starts_with("invalid mapping file locations.toml"));
        assert!(e.source().is_some());
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds and anyhow conversion
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<InstallError>();
        assert_send_sync::<ConfigError>();
    }

    #[test]
    fn install_error_converts_to_anyhow() {
        let e = InstallError::MissingSource {
            path: PathBuf::from("x"),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
