//! Configuration loading: the mapping of destinations to sources.
pub mod locations;
pub mod toml_loader;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::install::LinkSpec;

/// All loaded configuration for a run.
#[derive(Debug)]
pub struct Config {
    /// Directory sources are resolved against.
    pub source_root: PathBuf,
    /// The mapping file that was read.
    pub locations_file: PathBuf,
    /// Declared links, in file order.
    pub links: Vec<LinkSpec>,
}

impl Config {
    /// Load the mapping for `source_root`.
    ///
    /// Reads `locations_file` when given, otherwise
    /// `<source_root>/locations.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping file cannot be read or parsed.
    pub fn load(source_root: &Path, locations_file: Option<&Path>) -> Result<Self, ConfigError> {
        let locations_file = locations_file
            .map_or_else(|| locations::default_path(source_root), Path::to_path_buf);
        let links = locations::load(&locations_file)?;
        Ok(Self {
            source_root: source_root.to_path_buf(),
            locations_file,
            links,
        })
    }
}
