//! Artifact discovery in package library directories
//!
//! This module handles:
//! - Listing a package's `libraries/<platform>` directory, flat or recursive
//! - Classifying files by the platform profile's suffixes
//! - Listing the optional plugin directory (always flat)
//!
//! A directory that does not exist lists as empty. Packages that ship nothing
//! for a platform are valid. A directory that exists but cannot be listed
//! yields a [`LibraryScanFailed`](crate::NativeDepsError::LibraryScanFailed)
//! error.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::domain::{ArtifactKind, ArtifactReference, SearchMode, ThirdPartyPackage};
use crate::error::{Result, locator as locator_error};
use crate::platform::PlatformProfile;

/// Lists the artifacts of one package for one platform
///
/// Nothing is read from disk until [`artifacts`](Self::artifacts) is iterated,
/// and every call starts a fresh listing.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactLocator<'a> {
    package: &'a ThirdPartyPackage,
    profile: &'a PlatformProfile,
}

/// Create a locator for `package` under `profile`
pub fn locate<'a>(
    package: &'a ThirdPartyPackage,
    profile: &'a PlatformProfile,
) -> ArtifactLocator<'a> {
    ArtifactLocator { package, profile }
}

impl<'a> ArtifactLocator<'a> {
    /// Directory scanned for static and dynamic libraries
    pub fn library_dir(&self) -> PathBuf {
        self.package.library_dir(self.profile)
    }

    /// Artifacts in order: static, dynamic, plugin
    ///
    /// On platforms where both suffixes are the same (`.so`), a file is
    /// yielded once as static and once as dynamic. Listing errors are
    /// yielded in place; callers usually stop at the first one.
    pub fn artifacts(&self) -> impl Iterator<Item = Result<ArtifactReference>> + use<'a> {
        let profile = self.profile;
        let package = self.package;
        let library_dir = package.library_dir(profile);
        let plugin_dir = package.plugin_path(profile);

        let statics = library_files(&library_dir, package.search, plugin_dir.clone())
            .filter(move |entry| keep(entry, |name| profile.is_static(name)))
            .map(move |entry| entry.map(|path| artifact(package, path, ArtifactKind::Static)));

        let dynamics = library_files(&library_dir, package.search, plugin_dir.clone())
            .filter(move |entry| keep(entry, |name| profile.is_dynamic(name)))
            .map(move |entry| entry.map(|path| artifact(package, path, ArtifactKind::Dynamic)));

        let plugins = plugin_dir
            .into_iter()
            .flat_map(|dir| library_files(&dir, SearchMode::Flat, None))
            .filter(move |entry| keep(entry, |name| profile.is_plugin(name)))
            .map(move |entry| entry.map(|path| artifact(package, path, ArtifactKind::Plugin)));

        statics.chain(dynamics).chain(plugins).inspect(|found| {
            if let Ok(found) = found {
                debug!(
                    "Located {:?} artifact {} in {}",
                    found.kind,
                    found.path.display(),
                    found.origin
                );
            }
        })
    }
}

fn artifact(package: &ThirdPartyPackage, path: PathBuf, kind: ArtifactKind) -> ArtifactReference {
    ArtifactReference {
        path,
        kind,
        origin: package.name.clone(),
    }
}

/// Errors always pass; files pass when their name satisfies `predicate`
fn keep(entry: &Result<PathBuf>, predicate: impl Fn(&OsStr) -> bool) -> bool {
    match entry {
        Ok(path) => path.file_name().is_some_and(predicate),
        Err(_) => true,
    }
}

/// Regular files below `dir`, sorted by name within each directory
///
/// `prune` names a directory whose subtree is skipped entirely. A missing
/// `dir`, or an entry that vanished or is a dangling link, is skipped; any
/// other walk error is yielded.
fn library_files(
    dir: &Path,
    search: SearchMode,
    prune: Option<PathBuf>,
) -> impl Iterator<Item = Result<PathBuf>> + use<> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    let walker = match search {
        SearchMode::Flat => walker.max_depth(1),
        SearchMode::Recursive => walker,
    };
    let root = dir.to_path_buf();

    walker
        .into_iter()
        .filter_entry(move |entry| prune.as_deref().is_none_or(|pruned| entry.path() != pruned))
        .filter_map(move |entry| match entry {
            Ok(entry) => entry.file_type().is_file().then(|| Ok(entry.into_path())),
            Err(err) if is_not_found(&err) => None,
            Err(err) => Some(Err(locator_error::from_walk(&root, &err))),
        })
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|io_err| io_err.kind() == ErrorKind::NotFound)
}
