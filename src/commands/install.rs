//! The install command: load the mapping, then preview or apply it.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, VERSION};
use crate::config::Config;
use crate::install::{self, InstallReport, InstallationRoots, PlannedEntry};
use crate::logging::{Log, Verbosity};

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the destination cannot be determined, the mapping
/// cannot be loaded, or any entry fails to install (or, in a dry run, would
/// fail).
pub fn run(cli: &Cli, log: &dyn Log) -> Result<()> {
    let verbosity = cli.verbosity();
    let chatty = verbosity > Verbosity::Nothing;

    log.debug(&format!("dotlinks {VERSION}"));

    let dest_dir = resolve_dest_dir(cli.dest_dir.as_deref(), dirs::home_dir())?;

    if chatty {
        log.stage("Loading configuration");
    }
    let config = Config::load(&cli.src_dir, cli.locations.as_deref())?;
    log.debug(&format!(
        "loaded {} entries from {}",
        config.links.len(),
        config.locations_file.display()
    ));

    let roots = InstallationRoots::new(&config.source_root, &dest_dir)?;

    if cli.dry_run {
        if chatty {
            log.stage("Planning links");
        }
        let plan = install::plan_links(&config.links, &roots)?;
        return report_plan(&plan, verbosity, log);
    }

    if chatty {
        log.stage("Installing links");
    }
    let report = install::install_links(&config.links, &roots, verbosity, log).with_context(|| {
        format!(
            "installing links into {}",
            roots.destination_root().display()
        )
    })?;
    if chatty {
        log.info(&summary(&report));
    }
    Ok(())
}

/// Log every planned entry and fail if any of them could not be installed.
fn report_plan(plan: &[PlannedEntry], verbosity: Verbosity, log: &dyn Log) -> Result<()> {
    let mut invalid = 0usize;
    let mut changes = 0usize;
    for entry in plan {
        if entry.is_invalid() {
            invalid += 1;
            log.warn(&entry.to_string());
        } else if entry.needs_change() {
            changes += 1;
            log.dry_run(&entry.to_string());
        } else {
            verbosity.report(log, Verbosity::LinkOk, &entry.to_string());
        }
    }
    if verbosity > Verbosity::Nothing {
        log.info(&format!("{changes} of {} entries would change", plan.len()));
    }
    if invalid > 0 {
        anyhow::bail!("{invalid} entries cannot be installed");
    }
    Ok(())
}

/// One-line summary of a finished run.
fn summary(report: &InstallReport) -> String {
    format!(
        "{} entries: {} linked, {} removed, {} unchanged, {} backups",
        report.outcomes.len(),
        report.linked(),
        report.removed(),
        report.unchanged(),
        report.backups().len()
    )
}

/// Pick the install root: the explicit `--dest-dir`, else the home directory.
///
/// # Errors
///
/// Returns an error if neither is available.
pub fn resolve_dest_dir(explicit: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    home.ok_or_else(|| anyhow::anyhow!("cannot determine home directory. Use --dest-dir"))
}
