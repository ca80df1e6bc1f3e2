//! Symlink resource.
use std::fs;
use std::path::PathBuf;

use super::helpers::fs::{create_symlink, describe_entry, ensure_parent_dir};
use super::{Resource, ResourceChange, ResourceState, backup};
use crate::error::InstallError;
use crate::logging::{Log, Verbosity};
use crate::paths::link_target_matches;

/// A symlink at `destination` pointing to `source`.
#[derive(Debug, Clone)]
pub struct SymlinkResource {
    /// The file or directory the link points to (absolute).
    pub source: PathBuf,
    /// Where the link is created (absolute).
    pub destination: PathBuf,
}

impl SymlinkResource {
    /// Create a new symlink resource.
    #[must_use]
    pub const fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Check whether the source exists, following symlinks.
    fn source_exists(&self) -> Result<bool, InstallError> {
        self.source
            .try_exists()
            .map_err(InstallError::io("inspect", &self.source))
    }

    /// Render `<destination> <- <source>`, marking directory sources with `/`.
    fn arrow(&self) -> String {
        let dir_marker = if self.source.is_dir() { "/" } else { "" };
        format!(
            "{} <- {}{dir_marker}",
            self.destination.display(),
            self.source.display()
        )
    }
}

impl Resource for SymlinkResource {
    fn description(&self) -> String {
        self.arrow()
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if !self.source_exists()? {
            return Ok(ResourceState::Invalid {
                reason: format!("source {} not found", self.source.display()),
            });
        }

        // Compare the literal link value, not what it resolves to.
        if let Ok(existing) = fs::read_link(&self.destination)
            && link_target_matches(&existing, &self.source)
        {
            return Ok(ResourceState::Correct);
        }

        Ok(describe_entry(&self.destination)?
            .map_or(ResourceState::Missing, |current| ResourceState::Occupied {
                current,
            }))
    }

    fn apply(&self, verbosity: Verbosity, log: &dyn Log) -> Result<ResourceChange, InstallError> {
        let backup = match self.current_state()? {
            ResourceState::Invalid { .. } => {
                return Err(InstallError::MissingSource {
                    path: self.source.clone(),
                });
            }
            ResourceState::Correct => {
                verbosity.report(log, Verbosity::LinkOk, &format!("exists   {}", self.arrow()));
                return Ok(ResourceChange::AlreadyCorrect);
            }
            ResourceState::Occupied { .. } => {
                Some(backup::back_up(&self.destination, verbosity, log)?)
            }
            ResourceState::Missing => None,
        };

        verbosity.report(log, Verbosity::CreateLink, &format!("linking  {}", self.arrow()));
        ensure_parent_dir(&self.destination)?;
        create_symlink(&self.source, &self.destination)?;

        Ok(ResourceChange::Linked { backup })
    }
}
