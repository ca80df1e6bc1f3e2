//! Symlink installer for dotfile repositories.
//!
//! Reads a mapping of destinations to sources, links each destination to its
//! source, and renames anything already in the way to a numbered backup
//! (`<name>.bkp_<N>`) instead of deleting it.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: load the `locations.toml` mapping
//! - **[`install`]**: validate a mapping against its roots, then apply or preview it
//! - **[`resources`]**: idempotent `check + apply` primitives (links, removals, backups)
//! - **[`commands`]**: command-line orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod logging;
pub mod paths;
pub mod resources;
