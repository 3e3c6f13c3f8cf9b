//! Shared testing utilities for sprig CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `sprig` binary within the
    /// default workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sprig").expect("Failed to locate sprig binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Assert the workspace directory contains no entries.
    pub fn assert_work_dir_empty(&self) {
        let entries = fs::read_dir(&self.work_dir)
            .expect("Failed to read test work directory")
            .count();
        assert_eq!(entries, 0, "work directory should be empty");
    }
}
