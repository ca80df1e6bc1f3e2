//! Numbered backups: move an existing entry aside instead of deleting it.
//!
//! A backup of `path` is named `<path>.bkp_<N>` and sits next to the
//! original, with `N` the smallest non-negative integer not already taken.
//! Backups are never cleaned up.
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::fs::entry_exists;
use crate::error::InstallError;
use crate::logging::{Log, Verbosity};

/// Infix placed between the original name and the backup index.
pub const BACKUP_SUFFIX: &str = ".bkp_";

/// Return the backup name for `path` with the given index.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use dotlinks_cli::resources::backup::backup_candidate;
///
/// assert_eq!(
///     backup_candidate(Path::new("/home/user/.bashrc"), 2),
///     PathBuf::from("/home/user/.bashrc.bkp_2"),
/// );
/// ```
#[must_use]
pub fn backup_candidate(path: &Path, index: u32) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!("{BACKUP_SUFFIX}{index}"));
    PathBuf::from(name)
}

/// Find the lowest-numbered backup name for `path` with nothing at it.
///
/// This only probes; nothing is renamed.
///
/// # Errors
///
/// Returns an error if a candidate cannot be inspected or every index is
/// taken.
pub fn next_backup_path(path: &Path) -> Result<PathBuf, InstallError> {
    for index in 0..=u32::MAX {
        let candidate = backup_candidate(path, index);
        if !entry_exists(&candidate)? {
            return Ok(candidate);
        }
    }
    Err(InstallError::BackupNamesExhausted {
        path: path.to_path_buf(),
    })
}

/// Rename the entry at `path` to its next free backup name and return that
/// name.
///
/// The entry may be a file, a directory or a symlink; links are moved, not
/// followed. The content is preserved exactly since this is a rename.
///
/// # Errors
///
/// Returns [`InstallError::NothingToBackUp`] if nothing exists at `path`,
/// or an I/O error if probing or renaming fails.
pub fn back_up(path: &Path, verbosity: Verbosity, log: &dyn Log) -> Result<PathBuf, InstallError> {
    if !entry_exists(path)? {
        return Err(InstallError::NothingToBackUp {
            path: path.to_path_buf(),
        });
    }
    let backup = next_backup_path(path)?;
    verbosity.report(
        log,
        Verbosity::RenameFile,
        &format!("renaming {} -> {}", path.display(), backup.display()),
    );
    fs::rename(path, &backup).map_err(InstallError::io("rename", path))?;
    Ok(backup)
}
