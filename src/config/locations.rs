//! Mapping file loading: `locations.toml`.
//!
//! Each top-level key is a destination relative to the destination root and
//! each value a source relative to the source root. An empty value means the
//! destination should be removed (with backup):
//!
//! ```toml
//! ".bashrc" = "rcfiles/bashrc"
//! ".config/app" = "config_folder_for_app"
//! ".oldfile" = ""
//! ```
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::toml_loader;
use crate::error::ConfigError;
use crate::install::LinkSpec;

/// Default mapping file name, looked up inside the source root.
pub const LOCATIONS_FILE: &str = "locations.toml";

/// Raw mapping file: destination → source, in document order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct LocationsFile {
    entries: IndexMap<String, String>,
}

impl LocationsFile {
    fn into_specs(self) -> Vec<LinkSpec> {
        self.entries
            .into_iter()
            .map(|(destination, source)| {
                if source.is_empty() {
                    LinkSpec::remove(destination)
                } else {
                    LinkSpec::link(destination, source)
                }
            })
            .collect()
    }
}

/// Load the mapping at `path`, preserving the order of its entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or has a
/// value that is not a string.
pub fn load(path: &Path) -> Result<Vec<LinkSpec>, ConfigError> {
    toml_loader::load_config::<LocationsFile>(path).map(LocationsFile::into_specs)
}

/// Parse mapping `content` that was read from `path`.
///
/// # Errors
///
/// Returns an error if `content` is not valid TOML or has a non-string value.
pub fn parse(path: &Path, content: &str) -> Result<Vec<LinkSpec>, ConfigError> {
    toml_loader::parse_config::<LocationsFile>(path, content).map(LocationsFile::into_specs)
}

/// Path of the default mapping file for `source_root`.
#[must_use]
pub fn default_path(source_root: &Path) -> PathBuf {
    source_root.join(LOCATIONS_FILE)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn parse_str(content: &str) -> Result<Vec<LinkSpec>, ConfigError> {
        parse(Path::new(LOCATIONS_FILE), content)
    }

    #[test]
    fn parses_links_and_removals() {
        let specs = parse_str(
            r#"# Link destination = Link source
".bashrc" = "rcfiles/bashrc"
".config/app" = "config_folder_for_app"
".oldfile" = ""
"#,
        )
        .unwrap();
        assert_eq!(
            specs,
            vec![
                LinkSpec::link(".bashrc", "rcfiles/bashrc"),
                LinkSpec::link(".config/app", "config_folder_for_app"),
                LinkSpec::remove(".oldfile"),
            ]
        );
    }

    #[test]
    fn keeps_document_order() {
        let specs = parse_str(
            r#""zz" = "z"
"aa" = "a"
"mm" = "m"
"#,
        )
        .unwrap();
        let order: Vec<_> = specs.iter().map(|s| s.destination.clone()).collect();
        assert_eq!(
            order,
            vec![PathBuf::from("zz"), PathBuf::from("aa"), PathBuf::from("mm")]
        );
    }

    #[test]
    fn tilde_destination_is_kept_verbatim() {
        let specs = parse_str("\"~/.oldfile\" = \"\"\n").unwrap();
        assert_eq!(specs[0].destination, PathBuf::from("~/.oldfile"));
        assert_eq!(specs[0].source, None);
    }

    #[test]
    fn empty_file_is_an_empty_mapping() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn non_string_value_is_rejected() {
        let err = parse_str("\".bashrc\" = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn nested_table_is_rejected() {
        let err = parse_str("[config]\napp = \"app\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reads_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(default_path(dir.path()), "\".vimrc\" = \"vimrc\"\n").unwrap();
        let specs = load(&default_path(dir.path())).unwrap();
        assert_eq!(specs, vec![LinkSpec::link(".vimrc", "vimrc")]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&default_path(dir.path())).unwrap_err();
        assert!(err.to_string().contains(LOCATIONS_FILE));
    }
}
