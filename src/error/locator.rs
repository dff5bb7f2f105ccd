//! Library directory listing errors
//!
//! A library or plugin directory that does not exist is not an error; the
//! package simply ships nothing for the platform. One that exists but cannot
//! be listed is.

use std::path::Path;

use super::NativeDepsError;

impl_error_constructors! {
    /// Creates a library scan failure error
    scan_failed => LibraryScanFailed { path, reason },
}

/// Wraps a walk error raised while listing `dir`
///
/// The error's own path is reported when it has one, since a recursive walk
/// can fail below `dir`.
pub fn from_walk(dir: &Path, err: &walkdir::Error) -> NativeDepsError {
    let path = err.path().unwrap_or(dir);
    let reason = match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    };
    scan_failed(path.display().to_string(), reason)
}
