//! Cross-platform path utilities
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nativedeps::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("C:\\libs\\a.dll")), "C:/libs/a.dll");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path absolute and fold away `.` and `..` components
///
/// Purely lexical: nothing is read from disk and symbolic links are left
/// alone, so paths that do not exist yet normalize the same way as paths
/// that do.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nativedeps::path_utils::normalize;
///
/// let root = normalize(Path::new("/project/Source/MySQL/../../ThirdParty/MariaDB"));
/// assert_eq!(root, Path::new("/project/ThirdParty/MariaDB"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut result = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, matching the OS
                if !matches!(
                    result.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    result.pop();
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

/// Check whether `name` ends with `suffix`, ignoring ASCII case
///
/// Compares raw name bytes, so file names that are not valid UTF-8 match
/// as long as their suffix does.
///
/// # Examples
///
/// ```
/// use std::ffi::OsStr;
/// use nativedeps::path_utils::has_suffix_ignore_ascii_case;
///
/// assert!(has_suffix_ignore_ascii_case(OsStr::new("LIBMARIADB.DLL"), ".dll"));
/// ```
pub fn has_suffix_ignore_ascii_case(name: &OsStr, suffix: &str) -> bool {
    let name = name.as_encoded_bytes();
    name.len()
        .checked_sub(suffix.len())
        .is_some_and(|start| name[start..].eq_ignore_ascii_case(suffix.as_bytes()))
}
