//! Staging errors
//!
//! These are the only fatal errors of a provisioning run: the filesystem
//! refused to create the output directory or to copy an artifact into it.

use std::path::Path;

use super::NativeDepsError;

impl_error_constructors! {
    /// Creates an output directory creation error
    output_dir_failed => OutputDirCreateFailed { path, reason },
    /// Creates a copy failure error
    copy_failed => StagingFailed { source_path, destination, reason },
    /// Creates an invalid artifact path error
    invalid_artifact => InvalidArtifactPath { path },
}

/// Wraps an IO error raised while creating `dir`
pub fn from_create_dir(dir: &Path, err: &std::io::Error) -> NativeDepsError {
    output_dir_failed(dir.display().to_string(), err.to_string())
}

/// Wraps an IO error raised while copying `source` to `destination`
pub fn from_copy(source: &Path, destination: &Path, err: &std::io::Error) -> NativeDepsError {
    copy_failed(
        source.display().to_string(),
        destination.display().to_string(),
        err.to_string(),
    )
}
