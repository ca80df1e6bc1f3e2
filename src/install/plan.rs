//! Read-only preview of what [`install_links`](super::install_links) would do.
use std::fmt;
use std::path::{Path, PathBuf};

use super::{InstallationRoots, LinkSpec, validate};
use crate::error::InstallError;
use crate::resources::ResourceState;
use crate::resources::backup::next_backup_path;

/// The predicted effect of installing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Absolute destination path.
    pub destination: PathBuf,
    /// Absolute source path, or `None` for a removal.
    pub source: Option<PathBuf>,
    /// What is at the destination now.
    pub state: ResourceState,
    /// Where the current entry would be moved, if it would be.
    pub backup: Option<PathBuf>,
    /// Whether the source is a directory, shown as a trailing `/`.
    pub source_is_dir: bool,
}

impl PlannedEntry {
    /// Return `true` if installing this entry would fail.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.state, ResourceState::Invalid { .. })
    }

    /// Return `true` if installing this entry would change the filesystem.
    #[must_use]
    pub const fn needs_change(&self) -> bool {
        self.state.needs_change()
    }
}

impl fmt::Display for PlannedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dst = self.destination.display();
        if let ResourceState::Invalid { reason } = &self.state {
            return write!(f, "cannot link {dst}: {reason}");
        }
        if let Some(backup) = &self.backup {
            write!(f, "would rename {dst} -> {}", backup.display())?;
            if self.source.is_some() {
                f.write_str("; ")?;
            }
        }
        let dir_marker = if self.source_is_dir { "/" } else { "" };
        match (&self.source, &self.state) {
            (Some(src), ResourceState::Correct) => {
                write!(f, "exists   {dst} <- {}{dir_marker}", src.display())
            }
            (Some(src), _) => write!(f, "would link {dst} <- {}{dir_marker}", src.display()),
            (None, ResourceState::Correct) => write!(f, "nothing to remove at {dst}"),
            (None, _) => Ok(()),
        }
    }
}

/// Predict the effect of [`install_links`](super::install_links) without
/// touching the filesystem.
///
/// Each entry is inspected against the filesystem as it is now, so when one
/// entry's destination lies inside another's the preview can differ from
/// what a real run would do.
///
/// # Errors
///
/// Returns the same validation errors as `install_links`, or an error if an
/// entry cannot be inspected. A missing source is not an error here; it is
/// reported as an invalid entry.
pub fn plan_links(
    mapping: &[LinkSpec],
    roots: &InstallationRoots,
) -> Result<Vec<PlannedEntry>, InstallError> {
    validate::resolve_all(mapping, roots)?
        .into_iter()
        .map(|location| -> Result<PlannedEntry, InstallError> {
            let state = location.resource().current_state()?;
            let backup = match state {
                ResourceState::Occupied { .. } => Some(next_backup_path(&location.destination)?),
                _ => None,
            };
            let source_is_dir = location.source.as_deref().is_some_and(Path::is_dir);
            Ok(PlannedEntry {
                destination: location.destination,
                source: location.source,
                state,
                backup,
                source_is_dir,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(source: Option<&str>, state: ResourceState, backup: Option<&str>) -> PlannedEntry {
        PlannedEntry {
            destination: PathBuf::from("/home/user/.bashrc"),
            source: source.map(PathBuf::from),
            state,
            backup: backup.map(PathBuf::from),
            source_is_dir: false,
        }
    }

    #[test]
    fn display_variants() {
        let lines = [
            entry(Some("/repo/bashrc"), ResourceState::Missing, None),
            entry(
                Some("/repo/bashrc"),
                ResourceState::Occupied {
                    current: "regular file".into(),
                },
                Some("/home/user/.bashrc.bkp_0"),
            ),
            entry(Some("/repo/bashrc"), ResourceState::Correct, None),
            entry(
                None,
                ResourceState::Occupied {
                    current: "regular file".into(),
                },
                Some("/home/user/.bashrc.bkp_1"),
            ),
            entry(None, ResourceState::Correct, None),
            entry(
                Some("/repo/bashrc"),
                ResourceState::Invalid {
                    reason: "source /repo/bashrc not found".into(),
                },
                None,
            ),
        ]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

        insta::assert_snapshot!(lines, @r"
        would link /home/user/.bashrc <- /repo/bashrc
        would rename /home/user/.bashrc -> /home/user/.bashrc.bkp_0; would link /home/user/.bashrc <- /repo/bashrc
        exists   /home/user/.bashrc <- /repo/bashrc
        would rename /home/user/.bashrc -> /home/user/.bashrc.bkp_1
        nothing to remove at /home/user/.bashrc
        cannot link /home/user/.bashrc: source /repo/bashrc not found
        ");
    }

    #[test]
    fn plan_never_mutates() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("repo");
        let home = dir.path().join("home");
        fs::create_dir_all(&repo).unwrap();
        fs::create_dir_all(&home).unwrap();
        fs::write(repo.join("bashrc"), "a").unwrap();
        fs::write(home.join(".bashrc"), "old").unwrap();
        fs::write(home.join(".bashrc.bkp_0"), "older").unwrap();
        fs::write(home.join(".oldfile"), "stale").unwrap();
        let roots = InstallationRoots::new(&repo, &home)
            .unwrap()
            .with_home(Some(home.clone()));

        let plan = plan_links(
            &[
                LinkSpec::link(".bashrc", "bashrc"),
                LinkSpec::link(".vimrc", "vimrc"),
                LinkSpec::remove(".oldfile"),
                LinkSpec::remove(".gone"),
            ],
            &roots,
        )
        .unwrap();

        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].backup.as_deref(), Some(home.join(".bashrc.bkp_1").as_path()));
        assert!(plan[1].is_invalid());
        assert!(plan[2].needs_change());
        assert_eq!(plan[3].state, ResourceState::Correct);

        assert_eq!(fs::read_to_string(home.join(".bashrc")).unwrap(), "old");
        assert_eq!(fs::read_to_string(home.join(".oldfile")).unwrap(), "stale");
        assert!(!home.join(".bashrc.bkp_1").exists());
    }

    #[test]
    fn directory_source_is_marked_like_a_real_run() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("repo");
        let home = dir.path().join("home");
        fs::create_dir_all(repo.join("nvim")).unwrap();
        fs::create_dir_all(&home).unwrap();
        let roots = InstallationRoots::new(&repo, &home)
            .unwrap()
            .with_home(Some(home.clone()));

        let plan = plan_links(&[LinkSpec::link(".nvim", "nvim")], &roots).unwrap();

        assert!(plan[0].source_is_dir);
        assert_eq!(
            plan[0].to_string(),
            format!(
                "would link {} <- {}/",
                home.join(".nvim").display(),
                repo.join("nvim").display()
            )
        );
    }

    #[cfg(unix)]
    #[test]
    fn correct_directory_link_is_marked() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("repo");
        let home = dir.path().join("home");
        fs::create_dir_all(repo.join("nvim")).unwrap();
        fs::create_dir_all(&home).unwrap();
        std::os::unix::fs::symlink(repo.join("nvim"), home.join(".nvim")).unwrap();
        let roots = InstallationRoots::new(&repo, &home)
            .unwrap()
            .with_home(Some(home.clone()));

        let plan = plan_links(&[LinkSpec::link(".nvim", "nvim")], &roots).unwrap();

        assert!(plan[0].to_string().starts_with("exists   "));
        assert!(plan[0].to_string().ends_with("nvim/"));
    }

    #[test]
    fn plan_rejects_escaping_entries() {
        let roots = InstallationRoots::new("/repo", "/home/user").unwrap();
        let err = plan_links(&[LinkSpec::remove("../other/.bashrc")], &roots).unwrap_err();
        assert!(matches!(err, InstallError::Containment { .. }));
    }
}
