//! Link installation: resolve a mapping against two roots, then apply it.
//!
//! [`install_links`] is the entry point. It resolves and checks every entry
//! first ([`validate::resolve_all`]), then applies each one in mapping order
//! through the [`resources`](crate::resources) layer. Nothing is rolled back
//! when an entry fails part way through a batch.
pub mod plan;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::logging::{Log, Verbosity};
use crate::paths::normalize;
use crate::resources::removal::RemovalResource;
use crate::resources::symlink::SymlinkResource;
use crate::resources::{Resource, ResourceChange};

pub use plan::{PlannedEntry, plan_links};

/// One declared intent from the mapping file.
///
/// With a source, a link is created at `destination` pointing to it.
/// Without one, whatever is at `destination` is moved to a backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// Destination relative to the destination root; may start with `~`.
    pub destination: PathBuf,
    /// Source relative to the source root, or `None` to remove.
    pub source: Option<PathBuf>,
}

impl LinkSpec {
    /// Declare a link from `destination` to `source`.
    #[must_use]
    pub fn link(destination: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            source: Some(source.into()),
        }
    }

    /// Declare that `destination` should be cleared.
    #[must_use]
    pub fn remove(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            source: None,
        }
    }
}

/// A [`LinkSpec`] resolved to absolute, normalized paths inside the roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Absolute destination path.
    pub destination: PathBuf,
    /// Absolute source path, or `None` for a removal.
    pub source: Option<PathBuf>,
}

impl ResolvedLocation {
    /// The resource that brings this location into its declared state.
    #[must_use]
    pub fn resource(&self) -> Box<dyn Resource> {
        match &self.source {
            Some(source) => Box::new(SymlinkResource::new(
                source.clone(),
                self.destination.clone(),
            )),
            None => Box::new(RemovalResource::new(self.destination.clone())),
        }
    }
}

/// The two directories every link must stay inside for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRoots {
    source_root: PathBuf,
    destination_root: PathBuf,
    home: Option<PathBuf>,
}

impl InstallationRoots {
    /// Build the roots, making both absolute and folding `.`/`..`.
    ///
    /// The home directory used for `~` expansion defaults to the current
    /// user's; override it with [`with_home`](Self::with_home).
    ///
    /// # Errors
    ///
    /// Returns an error if a relative root cannot be made absolute because
    /// the working directory is unavailable.
    pub fn new(
        source_root: impl AsRef<Path>,
        destination_root: impl AsRef<Path>,
    ) -> Result<Self, InstallError> {
        Ok(Self {
            source_root: absolute(source_root.as_ref())?,
            destination_root: absolute(destination_root.as_ref())?,
            home: dirs::home_dir(),
        })
    }

    /// Replace the home directory used for `~` expansion.
    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home.map(|h| normalize(&h));
        self
    }

    /// Directory all link sources must be inside.
    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Directory all link destinations must be inside.
    #[must_use]
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// Home directory used for `~` expansion, if known.
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}

fn absolute(path: &Path) -> Result<PathBuf, InstallError> {
    std::path::absolute(path)
        .map(|p| normalize(&p))
        .map_err(InstallError::io("resolve root", path))
}

/// What happened to one entry of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Absolute destination path.
    pub destination: PathBuf,
    /// The change that was made.
    pub change: ResourceChange,
}

/// Per-entry results of a successful [`install_links`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Outcomes in mapping order.
    pub outcomes: Vec<EntryOutcome>,
}

impl InstallReport {
    fn count(&self, pred: impl Fn(&ResourceChange) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.change)).count()
    }

    /// Number of links created.
    #[must_use]
    pub fn linked(&self) -> usize {
        self.count(|c| matches!(c, ResourceChange::Linked { .. }))
    }

    /// Number of destinations cleared.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.count(|c| matches!(c, ResourceChange::Removed { .. }))
    }

    /// Number of entries that needed no change.
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.count(|c| matches!(c, ResourceChange::AlreadyCorrect))
    }

    /// Every backup created, in the order they were made.
    #[must_use]
    pub fn backups(&self) -> Vec<&Path> {
        self.outcomes.iter().filter_map(|o| o.change.backup()).collect()
    }

    /// Return `true` if the run changed nothing on disk.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.unchanged() == self.outcomes.len()
    }
}

/// Install every entry of `mapping`, in order.
///
/// All entries are resolved and checked against `roots` before the first one
/// is applied. Each entry is then applied independently: an existing entry at
/// a destination is renamed to a numbered backup before the link is made, and
/// a link that already points at its source is left alone.
///
/// # Errors
///
/// A containment error means nothing was touched. Any other error stops the
/// batch at the failing entry; entries before it stay applied.
pub fn install_links(
    mapping: &[LinkSpec],
    roots: &InstallationRoots,
    verbosity: Verbosity,
    log: &dyn Log,
) -> Result<InstallReport, InstallError> {
    let resolved = validate::resolve_all(mapping, roots)?;
    log.debug(&format!(
        "installing {} entries from {} into {}",
        resolved.len(),
        roots.source_root().display(),
        roots.destination_root().display()
    ));

    let mut report = InstallReport::default();
    for location in &resolved {
        let resource = location.resource();
        log.debug(&format!("applying {}", resource.description()));
        let change = resource.apply(verbosity, log)?;
        report.outcomes.push(EntryOutcome {
            destination: location.destination.clone(),
            change,
        });
    }
    Ok(report)
}
