//! Idempotent resource primitives (check + apply pattern).
pub mod backup;
pub mod helpers;
pub mod removal;
pub mod symlink;

use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::logging::{Log, Verbosity};

/// State of a destination relative to what the mapping declares.
///
/// # Examples
///
/// ```
/// use dotlinks_cli::resources::ResourceState;
///
/// let occupied = ResourceState::Occupied { current: "regular file".into() };
/// assert_ne!(occupied, ResourceState::Correct);
/// assert!(occupied.needs_change());
/// assert!(!ResourceState::Correct.needs_change());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing exists at the destination yet.
    Missing,
    /// The destination already matches the declared state.
    Correct,
    /// Something else occupies the destination and must be backed up.
    Occupied {
        /// Description of what is there now.
        current: String,
    },
    /// The declared state cannot be applied (e.g. the source is missing).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

impl ResourceState {
    /// Return `true` if applying would change the filesystem.
    #[must_use]
    pub const fn needs_change(&self) -> bool {
        matches!(self, Self::Missing | Self::Occupied { .. })
    }
}

/// Result of applying a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Nothing needed to change.
    AlreadyCorrect,
    /// A link was created, after moving any previous entry to `backup`.
    Linked {
        /// Where the previous entry went, if there was one.
        backup: Option<PathBuf>,
    },
    /// The entry at the destination was moved to `backup`.
    Removed {
        /// Where the entry went.
        backup: PathBuf,
    },
}

impl ResourceChange {
    /// Return the backup created by this change, if any.
    #[must_use]
    pub fn backup(&self) -> Option<&Path> {
        match self {
            Self::AlreadyCorrect => None,
            Self::Linked { backup } => backup.as_deref(),
            Self::Removed { backup } => Some(backup.as_path()),
        }
    }
}

/// Unified interface for destinations that can be checked and applied.
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Inspect the filesystem and report the current state. Never mutates.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry cannot be inspected.
    fn current_state(&self) -> Result<ResourceState, InstallError>;

    /// Bring the destination into the declared state.
    ///
    /// Progress is reported through `log`, filtered by `verbosity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared state is invalid or a filesystem
    /// operation fails. Changes made before the failure are kept.
    fn apply(&self, verbosity: Verbosity, log: &dyn Log) -> Result<ResourceChange, InstallError>;
}
