// Shared helpers for integration tests.
//
// Provides a temporary source repository and destination home side by side,
// plus a fluent builder so each integration test can set up an isolated
// environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotlinks_cli::config::Config;
use dotlinks_cli::install::InstallationRoots;

/// A source repository and a destination home inside one
/// [`tempfile::TempDir`], deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding both `repo/` and `home/`.
    pub root: tempfile::TempDir,
    repo: PathBuf,
    home: PathBuf,
}

impl IntegrationTestContext {
    /// Create a context with empty `repo/` and `home/` directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let repo = root.path().join("repo");
        let home = root.path().join("home");
        std::fs::create_dir_all(&repo).expect("create repo dir");
        std::fs::create_dir_all(&home).expect("create home dir");
        Self { root, repo, home }
    }

    /// Source root.
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Destination root, also used as the home directory for `~`.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Roots for this context with `~` bound to [`home`](Self::home).
    pub fn roots(&self) -> InstallationRoots {
        InstallationRoots::new(&self.repo, &self.home)
            .expect("build roots")
            .with_home(Some(self.home.clone()))
    }

    /// Load `repo/locations.toml`.
    pub fn load_config(&self) -> Config {
        Config::load(&self.repo, None).expect("load config")
    }

    /// Write `content` to `home/<rel>`, creating parents.
    pub fn write_home(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.home.join(rel), content)
    }

    /// Read `home/<rel>` as a string.
    pub fn read_home(&self, rel: &str) -> String {
        std::fs::read_to_string(self.home.join(rel)).expect("read home file")
    }

    /// Return `true` if `home/<rel>` is a symlink.
    pub fn is_link(&self, rel: &str) -> bool {
        self.home
            .join(rel)
            .symlink_metadata()
            .is_ok_and(|m| m.file_type().is_symlink())
    }

    /// Target of the symlink at `home/<rel>`.
    pub fn link_target(&self, rel: &str) -> PathBuf {
        std::fs::read_link(self.home.join(rel)).expect("read link")
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, content).expect("write file");
    path.to_path_buf()
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new, empty context.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Create a source file at `repo/<rel>`.
    pub fn with_source(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.repo.join(rel), content);
        self
    }

    /// Create a source directory at `repo/<rel>`.
    pub fn with_source_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.ctx.repo.join(rel)).expect("create source dir");
        self
    }

    /// Write `repo/locations.toml`.
    pub fn with_locations(self, content: &str) -> Self {
        write_file(&self.ctx.repo.join("locations.toml"), content);
        self
    }

    /// Create a file already occupying `home/<rel>`.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        self.ctx.write_home(rel, content);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
