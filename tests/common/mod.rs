//! Common test utilities for Implant integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding an input tree and the generated output
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Input directory the tests populate
    pub fn input(&self) -> PathBuf {
        self.path.join("data")
    }

    /// Default output location
    pub fn output(&self) -> PathBuf {
        self.path.join("static.rs")
    }

    /// Write a file beneath the input directory
    pub fn write_input(&self, path: &str, content: &[u8]) {
        let file_path = self.input().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read the generated output
    #[allow(dead_code)]
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).expect("Failed to read output")
    }
}

/// Command for the implant binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn implant_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("implant").expect("Failed to find implant binary");
    cmd.current_dir(cwd)
        .env_remove("IMPLANT_INPUT")
        .env_remove("RUST_LOG");
    cmd
}
