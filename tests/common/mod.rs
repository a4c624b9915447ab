#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pine-guard binary.
#[macro_export]
macro_rules! pine_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pine-guard"))
    };
}

pub const CLEAN_SCRIPT: &str = "//@version=6\nindicator(\"Clean\", overlay=true)\nplot(close)\n";

pub const PLOT_IN_IF_SCRIPT: &str = "//@version=6\nindicator(\"Bad\")\nif close > open\n    plot(close)\n";

pub const OLD_VERSION_SCRIPT: &str =
    "//@version=5\nindicator(\"Old\")\nplot(close, color=color.red, transp=50)\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a pine-guard config file in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pine-guard.toml", content);
    }

    /// Command running inside the fixture with config loading disabled.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = pine_guard!();
        cmd.current_dir(self.path()).arg("--no-config");
        cmd
    }
}
