//! Removal resource: clear a destination by moving it to a backup.
use std::path::PathBuf;

use super::helpers::fs::describe_entry;
use super::{Resource, ResourceChange, ResourceState, backup};
use crate::error::InstallError;
use crate::logging::{Log, Verbosity};

/// A destination that should hold nothing.
///
/// Whatever is found there is renamed to a numbered backup, never deleted.
#[derive(Debug, Clone)]
pub struct RemovalResource {
    /// The path to clear (absolute).
    pub destination: PathBuf,
}

impl RemovalResource {
    /// Create a new removal resource.
    #[must_use]
    pub const fn new(destination: PathBuf) -> Self {
        Self { destination }
    }
}

impl Resource for RemovalResource {
    fn description(&self) -> String {
        format!("remove {}", self.destination.display())
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        Ok(describe_entry(&self.destination)?
            .map_or(ResourceState::Correct, |current| ResourceState::Occupied {
                current,
            }))
    }

    fn apply(&self, verbosity: Verbosity, log: &dyn Log) -> Result<ResourceChange, InstallError> {
        match self.current_state()? {
            ResourceState::Occupied { .. } => {
                let backup = backup::back_up(&self.destination, verbosity, log)?;
                Ok(ResourceChange::Removed { backup })
            }
            _ => {
                log.debug(&format!("nothing to remove at {}", self.destination.display()));
                Ok(ResourceChange::AlreadyCorrect)
            }
        }
    }
}
