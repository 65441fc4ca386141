//! Shared helpers for binary integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the compiled sitepack binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_sitepack")
}

/// Run sitepack with args against a working directory
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run sitepack binary")
}

/// Write a file, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project fixture with a source tree and a built dist/ directory
pub struct ProjectFixture {
    pub dir: TempDir,
}

impl ProjectFixture {
    /// Minimal site: two pages, contexts, and a dist/ tree with
    /// deployable and excluded files.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        write_file(root, "src/index.html", fixtures::INDEX_PAGE);
        write_file(root, "src/about.html", fixtures::ABOUT_PAGE);
        write_file(root, "src/stores/context.json", fixtures::GLOBAL_CONTEXT);
        write_file(root, "src/stores/pages/index.json", fixtures::INDEX_CONTEXT);

        write_file(root, "dist/index.html", "<html>built</html>");
        write_file(root, "dist/images/hero.png", "png-bytes");
        write_file(root, "dist/node_modules/pkg/index.js", "ignored");
        write_file(root, "dist/.env", "LEAK=1");

        write_file(root, ".env.local", fixtures::ENV_LOCAL);

        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
