//! Artifacts found in packages and their staged copies

use std::path::PathBuf;

/// Role of a located library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Passed to the linker
    Static,
    /// Staged next to the binaries and delay-loaded
    Dynamic,
    /// From the package's plugin directory; passed to the linker only.
    /// The staged dynamic library loads these itself.
    Plugin,
}

/// A library file located in a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReference {
    /// Absolute path of the file inside the package
    pub path: PathBuf,

    pub kind: ArtifactKind,

    /// Name of the package the file belongs to
    pub origin: String,
}

/// Outcome of staging one dynamic artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingRecord {
    pub source: PathBuf,

    /// Always `<output dir>/<file name of source>`
    pub destination: PathBuf,

    /// True only if this call wrote the destination file
    pub copied: bool,
}
