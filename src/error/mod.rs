//! Error types and handling for nativedeps
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`platform`]: Platform identifier errors
//! - [`locator`]: Library directory listing failures
//! - [`staging`]: Output directory and copy failures
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! A platform that is known but has no native profile is not an error at all:
//! provisioning is skipped for it and the build carries on without the
//! native feature.

#[macro_use]
mod macros;

pub mod config;
pub mod fs;
pub mod locator;
pub mod platform;
pub mod staging;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for provisioning operations
#[derive(Error, Diagnostic, Debug)]
pub enum NativeDepsError {
    // Platform errors
    #[error("Unknown platform: {identifier}")]
    #[diagnostic(
        code(nativedeps::platform::unknown),
        help("Known platforms: Win64, Linux, LinuxArm64, Mac, IOS, Android")
    )]
    UnknownPlatform { identifier: String },

    // Locator errors
    #[error("Failed to list libraries in '{path}': {reason}")]
    #[diagnostic(
        code(nativedeps::locator::scan_failed),
        help("Check that the package's library directories are readable")
    )]
    LibraryScanFailed { path: String, reason: String },

    // Staging errors
    #[error("Failed to create output directory '{path}': {reason}")]
    #[diagnostic(
        code(nativedeps::staging::output_dir_failed),
        help("Check that the project's Binaries directory is writable")
    )]
    OutputDirCreateFailed { path: String, reason: String },

    #[error("Failed to stage '{source_path}' to '{destination}': {reason}")]
    #[diagnostic(code(nativedeps::staging::copy_failed))]
    StagingFailed {
        source_path: String,
        destination: String,
        reason: String,
    },

    #[error("Artifact path has no file name: {path}")]
    #[diagnostic(code(nativedeps::staging::invalid_artifact))]
    InvalidArtifactPath { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(nativedeps::config::not_found),
        help("Pass --config or create nativedeps.yaml in the project root")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(nativedeps::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(nativedeps::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(nativedeps::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(nativedeps::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to serialize registrations: {reason}")]
    #[diagnostic(code(nativedeps::fs::serialize_failed))]
    SerializeFailed { reason: String },
}

impl From<serde_yaml::Error> for NativeDepsError {
    fn from(err: serde_yaml::Error) -> Self {
        NativeDepsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NativeDepsError {
    fn from(err: serde_json::Error) -> Self {
        NativeDepsError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NativeDepsError>;
