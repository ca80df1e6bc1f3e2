//! `dotlinks` binary entry point.
use anyhow::Result;
use clap::Parser;

use dotlinks_cli::cli::Cli;
use dotlinks_cli::commands;
use dotlinks_cli::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber();
    let log = Logger::new();

    commands::install::run(&args, &log)
}
