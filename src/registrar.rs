//! Registration of artifacts for the host build system
//!
//! A [`RegistrationSet`] collects what the host build system needs after
//! provisioning: libraries to link, files to ship with the product, and
//! libraries to mark as delay-loaded. Entries keep insertion order and are
//! never de-duplicated; consumers must tolerate repeats.

use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{ArtifactKind, ArtifactReference, StagingRecord};

/// Accumulated provisioning output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSet {
    /// Libraries passed to the linker, in search order
    #[serde(default)]
    pub link_libraries: Vec<PathBuf>,

    /// Files the packaging step ships verbatim
    #[serde(default)]
    pub runtime_dependencies: Vec<PathBuf>,

    /// Libraries loaded on first use instead of at process start
    #[serde(default)]
    pub delay_load: Vec<PathBuf>,

    /// Directories scanned for libraries, for the linker's search path
    #[serde(default)]
    pub library_search_paths: Vec<PathBuf>,
}

impl RegistrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one artifact
    ///
    /// Static and plugin artifacts go to the link list. Dynamic artifacts are
    /// recorded by their staged destination, in both the runtime manifest and
    /// the delay-load list; a dynamic artifact without a staging record is
    /// not recorded.
    pub fn register(&mut self, artifact: &ArtifactReference, staged: Option<&StagingRecord>) {
        match (artifact.kind, staged) {
            (ArtifactKind::Static | ArtifactKind::Plugin, _) => {
                self.link_libraries.push(artifact.path.clone());
            }
            (ArtifactKind::Dynamic, Some(record)) => {
                self.runtime_dependencies.push(record.destination.clone());
                self.delay_load.push(record.destination.clone());
            }
            (ArtifactKind::Dynamic, None) => {
                debug!(
                    "Skipping unstaged dynamic artifact {}",
                    artifact.path.display()
                );
            }
        }
    }

    /// Add a directory to the linker search path
    pub fn add_library_search_path(&mut self, dir: impl Into<PathBuf>) {
        self.library_search_paths.push(dir.into());
    }

    /// Add a file that ships with the product without being staged
    pub fn add_runtime_dependency(&mut self, path: impl Into<PathBuf>) {
        self.runtime_dependencies.push(path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.link_libraries.is_empty()
            && self.runtime_dependencies.is_empty()
            && self.delay_load.is_empty()
            && self.library_search_paths.is_empty()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
