//! Common test utilities for nativedeps integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project with vendored packages and a nativedeps.yaml
pub struct TestProject {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file relative to the project root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the project root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write nativedeps.yaml
    #[allow(dead_code)]
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("nativedeps.yaml", yaml)
    }

    /// Sorted entry names of a project directory
    #[allow(dead_code)]
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// nativedeps command running inside the project
    pub fn cmd(&self) -> Command {
        let mut cmd = nativedeps_cmd();
        cmd.current_dir(&self.path).env_remove("NATIVEDEPS_PLATFORM");
        cmd
    }

    /// Project root as the binary resolves it
    #[allow(dead_code)]
    pub fn root(&self) -> PathBuf {
        nativedeps::path_utils::normalize(&self.path)
    }
}

/// nativedeps binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn nativedeps_cmd() -> Command {
    Command::cargo_bin("nativedeps").expect("nativedeps binary should be built")
}

/// Parse the registrations JSON printed on stdout
#[allow(dead_code)]
pub fn registrations(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}

/// Path as it appears in the registrations JSON
#[allow(dead_code)]
pub fn json_path(path: &Path) -> serde_json::Value {
    serde_json::Value::String(path.to_string_lossy().into_owned())
}

impl TestProject {
    /// `nativedeps provision` for `platform` with the project's config file
    #[allow(dead_code)]
    pub fn provision_cmd(&self, platform: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("provision")
            .arg("--platform")
            .arg(platform)
            .arg("--config")
            .arg(self.path.join("nativedeps.yaml"));
        cmd
    }
}
