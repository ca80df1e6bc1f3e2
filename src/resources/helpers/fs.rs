//! File-system resource helpers.
use std::fs;
use std::io;
use std::path::Path;

use crate::error::InstallError;

/// Return `true` if anything (file, directory, or symlink, even a dangling
/// one) exists at `path`. Symlinks are not followed.
///
/// # Errors
///
/// Returns an error if the entry cannot be inspected for a reason other than
/// not existing (e.g. a permission error on a parent directory).
pub fn entry_exists(path: &Path) -> Result<bool, InstallError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(InstallError::io("inspect", path)(e)),
    }
}

/// Return a short description of what exists at `path`, without following
/// symlinks, or `None` if nothing does.
///
/// # Errors
///
/// Returns an error if the entry or its link target cannot be read.
pub fn describe_entry(path: &Path) -> Result<Option<String>, InstallError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(InstallError::io("inspect", path)(e)),
    };
    let description = if meta.is_symlink() {
        let target = fs::read_link(path).map_err(InstallError::io("read link", path))?;
        format!("symlink to {}", target.display())
    } else if meta.is_dir() {
        "directory".to_string()
    } else {
        "regular file".to_string()
    };
    Ok(Some(description))
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), InstallError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(InstallError::io("create parent", parent))?;
    }
    Ok(())
}

/// Create a symlink at `link` pointing to `target`.
///
/// # Errors
///
/// Returns an error if the link cannot be created.
pub fn create_symlink(target: &Path, link: &Path) -> Result<(), InstallError> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).map_err(InstallError::io("create link", link))
    }

    #[cfg(windows)]
    {
        let result = if target.is_dir() {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        };
        result.map_err(InstallError::io("create link", link))
    }
}
