//! Domain models for native dependency provisioning
//!
//! This module contains pure domain objects: the vendored packages that are
//! read, the artifacts found in them and the records of staged copies.

pub mod artifact;
pub mod package;

pub use artifact::{ArtifactKind, ArtifactReference, StagingRecord};
pub use package::{SearchMode, ThirdPartyPackage};
