//! Resolve declared link pairs against the installation roots.
use std::path::{Path, PathBuf};

use super::{InstallationRoots, LinkSpec, ResolvedLocation};
use crate::error::{InstallError, PathRole};
use crate::paths::{expand_home, is_strict_descendant, normalize};

/// Resolve every entry of `mapping` to absolute paths and check containment.
///
/// The whole batch is checked before anything is returned, so a single bad
/// entry means no entry is installed.
///
/// # Errors
///
/// Returns [`InstallError::Containment`] for the first destination or source
/// that is not strictly inside its root, or
/// [`InstallError::HomeUnavailable`] if a destination uses `~` and no home
/// directory is known.
pub fn resolve_all(
    mapping: &[LinkSpec],
    roots: &InstallationRoots,
) -> Result<Vec<ResolvedLocation>, InstallError> {
    mapping.iter().map(|spec| resolve(spec, roots)).collect()
}

/// Resolve a single entry.
fn resolve(spec: &LinkSpec, roots: &InstallationRoots) -> Result<ResolvedLocation, InstallError> {
    let expanded = expand_home(&spec.destination, roots.home()).ok_or_else(|| {
        InstallError::HomeUnavailable {
            path: spec.destination.clone(),
        }
    })?;
    let destination = contained(
        PathRole::Destination,
        &roots.destination_root().join(expanded),
        roots.destination_root(),
    )?;
    let source = spec
        .source
        .as_ref()
        .map(|source| {
            contained(
                PathRole::Source,
                &roots.source_root().join(source),
                roots.source_root(),
            )
        })
        .transpose()?;
    Ok(ResolvedLocation {
        destination,
        source,
    })
}

/// Normalize `joined` and require it to sit strictly below `root`.
fn contained(role: PathRole, joined: &Path, root: &Path) -> Result<PathBuf, InstallError> {
    let path = normalize(joined);
    if is_strict_descendant(&path, root) {
        Ok(path)
    } else {
        Err(InstallError::Containment {
            role,
            path: joined.to_path_buf(),
            root: root.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn roots() -> InstallationRoots {
        InstallationRoots::new("/repo", "/home/user")
            .unwrap()
            .with_home(Some(PathBuf::from("/home/user")))
    }

    #[test]
    fn resolves_relative_pairs_under_roots() {
        let resolved = resolve_all(&[LinkSpec::link(".bashrc", "rcfiles/bashrc")], &roots()).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].destination, PathBuf::from("/home/user/.bashrc"));
        assert_eq!(
            resolved[0].source,
            Some(PathBuf::from("/repo/rcfiles/bashrc"))
        );
    }

    #[test]
    fn removal_entry_has_no_source() {
        let resolved = resolve_all(&[LinkSpec::remove(".oldfile")], &roots()).unwrap();
        assert_eq!(resolved[0].source, None);
    }

    #[test]
    fn expands_home_in_destination() {
        let resolved = resolve_all(&[LinkSpec::remove("~/.oldfile")], &roots()).unwrap();
        assert_eq!(resolved[0].destination, PathBuf::from("/home/user/.oldfile"));
    }

    #[test]
    fn home_outside_destination_root_is_rejected() {
        let roots = InstallationRoots::new("/repo", "/srv/deploy")
            .unwrap()
            .with_home(Some(PathBuf::from("/home/user")));
        let err = resolve_all(&[LinkSpec::remove("~/.oldfile")], &roots).unwrap_err();
        assert!(matches!(
            err,
            InstallError::Containment {
                role: PathRole::Destination,
                ..
            }
        ));
    }

    #[test]
    fn tilde_without_home_is_an_error() {
        let roots = InstallationRoots::new("/repo", "/home/user")
            .unwrap()
            .with_home(None);
        let err = resolve_all(&[LinkSpec::remove("~/.oldfile")], &roots).unwrap_err();
        assert!(matches!(err, InstallError::HomeUnavailable { .. }));
    }

    #[test]
    fn parent_escape_is_a_containment_violation() {
        let err = resolve_all(&[LinkSpec::link("../escape", "bashrc")], &roots()).unwrap_err();
        match err {
            InstallError::Containment { role, path, root } => {
                assert_eq!(role, PathRole::Destination);
                assert_eq!(path, PathBuf::from("/home/user/../escape"));
                assert_eq!(root, PathBuf::from("/home/user"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn destination_root_itself_is_rejected() {
        for destination in [".", "", "a/.."] {
            let err = resolve_all(&[LinkSpec::remove(destination)], &roots()).unwrap_err();
            assert!(
                matches!(err, InstallError::Containment { .. }),
                "{destination:?} should be rejected"
            );
        }
    }

    #[test]
    fn absolute_destination_outside_root_is_rejected() {
        let err = resolve_all(&[LinkSpec::remove("/etc/passwd")], &roots()).unwrap_err();
        assert!(matches!(err, InstallError::Containment { .. }));
    }

    #[test]
    fn source_escape_is_a_containment_violation() {
        let err = resolve_all(&[LinkSpec::link(".bashrc", "../secrets")], &roots()).unwrap_err();
        assert!(matches!(
            err,
            InstallError::Containment {
                role: PathRole::Source,
                ..
            }
        ));
    }

    #[test]
    fn source_root_itself_is_rejected() {
        let err = resolve_all(&[LinkSpec::link(".dotfiles", ".")], &roots()).unwrap_err();
        assert!(matches!(
            err,
            InstallError::Containment {
                role: PathRole::Source,
                ..
            }
        ));
    }

    #[test]
    fn one_bad_entry_fails_whole_batch() {
        let mapping = [
            LinkSpec::link(".bashrc", "bashrc"),
            LinkSpec::link(".vimrc", "vimrc"),
            LinkSpec::link("../../etc/profile", "profile"),
        ];
        assert!(resolve_all(&mapping, &roots()).is_err());
    }

    #[test]
    fn inner_parent_components_are_folded() {
        let resolved =
            resolve_all(&[LinkSpec::link(".config/../.bashrc", "a/../bashrc")], &roots())
                .unwrap();
        assert_eq!(resolved[0].destination, PathBuf::from("/home/user/.bashrc"));
        assert_eq!(resolved[0].source, Some(PathBuf::from("/repo/bashrc")));
    }
}
