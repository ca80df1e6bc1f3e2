//! Lexical path helpers: normalization, home expansion, containment.
//!
//! Nothing here touches the filesystem. Paths are compared exactly as
//! written after `.` and `..` components are folded away, so a symlinked
//! directory in the middle of a path is not resolved.
use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components of `path` without consulting the filesystem.
///
/// A `..` at the root stays at the root, matching how the kernel resolves
/// `/..`. Leading `..` components of a relative path are kept.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Expand a leading `~` in `path` to `home`.
///
/// Only the bare `~` and `~/…` forms are recognised. Returns `None` when the
/// path needs expansion but no home directory is known.
#[must_use]
pub fn expand_home(path: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            Some(home?.join(components.as_path()))
        }
        _ => Some(path.to_path_buf()),
    }
}

/// Return `true` if `path` lies strictly below `root`.
///
/// Both arguments are expected to be normalized; the root itself is not its
/// own descendant.
#[must_use]
pub fn is_strict_descendant(path: &Path, root: &Path) -> bool {
    path != root && path.starts_with(root)
}

/// Compare a literal link target against an expected path.
///
/// Windows may report link targets with a `\\?\` verbatim prefix; both sides
/// are simplified before comparison so that prefix does not cause a mismatch.
#[must_use]
pub fn link_target_matches(target: &Path, expected: &Path) -> bool {
    dunce::simplified(target) == dunce::simplified(expected)
}
