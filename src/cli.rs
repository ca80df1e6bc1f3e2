//! Command-line argument surface.
use clap::Parser;
use std::path::PathBuf;

use crate::logging::Verbosity;

/// Version reported by `--version` and the startup log line.
pub const VERSION: &str = match option_env!("DOTLINKS_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Install symlinks listed in `<SRC_DIR>/locations.toml`, backing up whatever
/// is already at each destination.
#[derive(Parser, Debug)]
#[command(
    name = "dotlinks",
    about = "Install links to a list of files, backing up what was there",
    version = VERSION
)]
pub struct Cli {
    /// Directory containing the link sources and `locations.toml`
    #[arg(value_name = "SRC_DIR")]
    pub src_dir: PathBuf,

    /// Directory to install the links into (default: home directory)
    #[arg(short, long, value_name = "DIR")]
    pub dest_dir: Option<PathBuf>,

    /// Mapping file to read instead of `<SRC_DIR>/locations.toml`
    #[arg(short, long, value_name = "FILE")]
    pub locations: Option<PathBuf>,

    /// Report less; repeat up to three times to silence all reports
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Preview changes without applying
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Reporting tier selected by the `-q` count.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_quiet(self.quiet)
    }
}
