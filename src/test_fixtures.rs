//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_file};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let dll = write_file(temp.path(), "MariaDB/libraries/Windows/a.dll", "a");
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Base for temp dirs. A relative `TMPDIR` would put fixture trees (and
/// their `Binaries/` output) under the working directory, so fall back to
/// `/tmp` then.
fn temp_dir_base() -> PathBuf {
    let base = std::env::temp_dir();
    if base.is_absolute() {
        base
    } else if cfg!(windows) {
        std::env::var_os("TEMP").map_or_else(|| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory outside the working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `content` to `root/relative`, creating parent directories.
///
/// Returns the full path of the written file.
///
/// # Panics
///
/// Panics if the file or its parents cannot be created.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Sorted names of the entries directly inside `dir`.
///
/// # Panics
///
/// Panics if `dir` cannot be read.
#[must_use]
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
