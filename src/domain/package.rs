//! Vendored third-party package trees

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::path_utils::normalize;
use crate::platform::PlatformProfile;

/// Directory holding vendored packages, two levels above a module directory
pub const THIRD_PARTY_DIR: &str = "ThirdParty";

/// Directory inside a package holding per-platform library directories
pub const LIBRARIES_DIR: &str = "libraries";

/// How a package's library directory is searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Only files directly inside `libraries/<platform>`
    #[default]
    Flat,
    /// Every file below `libraries/<platform>`
    Recursive,
}

/// One vendored native dependency tree on disk
///
/// Packages are only ever read. Nothing under `root` is created, modified or
/// deleted by provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdPartyPackage {
    /// Package name, used for logging and as the artifacts' origin
    pub name: String,

    /// Root of the package tree
    pub root: PathBuf,

    /// Nested plugin directory, relative to the platform library directory
    pub plugin_dir: Option<PathBuf>,

    /// Search mode for the platform library directory
    pub search: SearchMode,
}

impl ThirdPartyPackage {
    /// Create a flat package without a plugin directory
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            plugin_dir: None,
            search: SearchMode::Flat,
        }
    }

    /// Package located at `<module_dir>/../../ThirdParty/<name>`
    pub fn beside_module(module_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let root = normalize(
            &module_dir
                .join("..")
                .join("..")
                .join(THIRD_PARTY_DIR)
                .join(&name),
        );
        Self::new(name, root)
    }

    /// Set the plugin directory
    pub fn with_plugin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugin_dir = Some(dir.into());
        self
    }

    /// Set the search mode
    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    /// `<root>/libraries/<profile subdirectory>`
    pub fn library_dir(&self, profile: &PlatformProfile) -> PathBuf {
        self.root
            .join(LIBRARIES_DIR)
            .join(profile.subdirectory_path())
    }

    /// Plugin directory under the library directory, if the package has one
    pub fn plugin_path(&self, profile: &PlatformProfile) -> Option<PathBuf> {
        self.plugin_dir
            .as_ref()
            .map(|dir| self.library_dir(profile).join(dir))
    }
}
