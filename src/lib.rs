//! nativedeps - native dependency provisioning
//!
//! Finds the prebuilt native libraries a project vendors under `ThirdParty/`,
//! picks the ones matching a build platform, stages the dynamic libraries
//! into `<project>/Binaries/<platform>` and reports what the linker and the
//! packaging step need: libraries to link, files to ship and libraries to
//! delay-load.
//!
//! ```no_run
//! use std::path::Path;
//! use nativedeps::{SearchMode, TargetPlatform, ThirdPartyPackage, provision};
//!
//! let module_dir = Path::new("Plugins/MySQL/Source/MySQL");
//! let packages = [
//!     ThirdPartyPackage::beside_module(module_dir, "MariaDB").with_plugin_dir("plugin"),
//!     ThirdPartyPackage::new("PostgreSQL", "Plugins/PostgreSQL/ThirdParty")
//!         .with_search(SearchMode::Recursive),
//! ];
//! let registrations = provision(TargetPlatform::Win64, Path::new("."), &packages)?;
//! for library in &registrations.link_libraries {
//!     println!("link {}", library.display());
//! }
//! # Ok::<(), nativedeps::NativeDepsError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod locator;
pub mod path_utils;
pub mod platform;
pub mod provision;
pub mod registrar;
pub mod staging;

#[cfg(test)]
mod test_fixtures;

pub use domain::{ArtifactKind, ArtifactReference, SearchMode, StagingRecord, ThirdPartyPackage};
pub use error::{NativeDepsError, Result};
pub use locator::{ArtifactLocator, locate};
pub use platform::{PlatformProfile, TargetPlatform, resolve};
pub use provision::{Provisioner, output_directory, provision};
pub use registrar::RegistrationSet;
pub use staging::{Stager, stage};
