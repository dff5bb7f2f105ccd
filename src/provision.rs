//! Provisioning pipeline
//!
//! For each package: resolve the platform profile, locate artifacts, stage
//! dynamic ones and register everything. A platform without a profile skips
//! every package without touching the filesystem. The first listing or
//! staging failure aborts the run; files copied before it stay in place.
//!
//! Runs that target the same output directory must not overlap.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::{ArtifactKind, StagingRecord, ThirdPartyPackage};
use crate::error::Result;
use crate::locator::locate;
use crate::platform::TargetPlatform;
use crate::registrar::RegistrationSet;
use crate::staging::Stager;

/// Directory under the project root holding per-platform binaries
pub const BINARIES_DIR: &str = "Binaries";

/// `<project_root>/Binaries/<platform>`
pub fn output_directory(project_root: &Path, platform: TargetPlatform) -> PathBuf {
    project_root.join(BINARIES_DIR).join(platform.as_str())
}

/// What happened to one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub package: String,

    /// False when the platform has no profile and the package was skipped
    pub supported: bool,

    /// Number of artifacts located
    pub located: usize,

    /// Staging records of the package's dynamic artifacts
    pub staged: Vec<StagingRecord>,
}

impl PackageReport {
    fn new(package: &ThirdPartyPackage, supported: bool) -> Self {
        Self {
            package: package.name.clone(),
            supported,
            located: 0,
            staged: Vec::new(),
        }
    }

    /// Artifacts copied by this run
    pub fn copied(&self) -> usize {
        self.staged.iter().filter(|record| record.copied).count()
    }

    /// Artifacts whose destination already existed (or would be copied, in a dry run)
    pub fn not_copied(&self) -> usize {
        self.staged.len() - self.copied()
    }
}

/// Result of provisioning a set of packages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub registrations: RegistrationSet,
    pub packages: Vec<PackageReport>,
}

/// Provisions packages for one platform into one output directory
#[derive(Debug, Clone)]
pub struct Provisioner {
    platform: TargetPlatform,
    stager: Stager,
    runtime_dependencies: Vec<PathBuf>,
}

impl Provisioner {
    pub fn new(platform: TargetPlatform, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            stager: Stager::new(output_dir),
            runtime_dependencies: Vec::new(),
        }
    }

    /// Provisioner staging into `<project_root>/Binaries/<platform>`
    pub fn for_project(platform: TargetPlatform, project_root: &Path) -> Self {
        Self::new(platform, output_directory(project_root, platform))
    }

    /// Compute and register destinations without writing anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.stager = self.stager.with_dry_run(dry_run);
        self
    }

    /// Files shipped with the product regardless of platform support
    pub fn with_runtime_dependencies(mut self, paths: Vec<PathBuf>) -> Self {
        self.runtime_dependencies = paths;
        self
    }

    pub fn platform(&self) -> TargetPlatform {
        self.platform
    }

    pub fn output_dir(&self) -> &Path {
        self.stager.output_dir()
    }

    /// Provision one package, appending to `registrations`
    pub fn provision_package(
        &self,
        package: &ThirdPartyPackage,
        registrations: &mut RegistrationSet,
    ) -> Result<PackageReport> {
        let Some(profile) = self.platform.profile() else {
            info!(
                "{} has no native libraries for {}, skipping",
                package.name, self.platform
            );
            return Ok(PackageReport::new(package, false));
        };

        let mut report = PackageReport::new(package, true);
        let locator = locate(package, profile);

        let library_dir = locator.library_dir();
        if library_dir.is_dir() {
            registrations.add_library_search_path(library_dir);
        } else {
            debug!(
                "{} ships no libraries for {} (looked in {})",
                package.name,
                self.platform,
                library_dir.display()
            );
        }

        for artifact in locator.artifacts() {
            let artifact = artifact?;
            report.located += 1;

            let record = match artifact.kind {
                ArtifactKind::Dynamic => Some(self.stager.stage(&artifact)?),
                ArtifactKind::Static | ArtifactKind::Plugin => None,
            };
            registrations.register(&artifact, record.as_ref());
            report.staged.extend(record);
        }

        Ok(report)
    }

    /// Provision packages in order, then append the extra runtime dependencies
    pub fn provision_all(&self, packages: &[ThirdPartyPackage]) -> Result<ProvisionOutcome> {
        let mut outcome = ProvisionOutcome::default();

        for package in packages {
            let report = self.provision_package(package, &mut outcome.registrations)?;
            outcome.packages.push(report);
        }

        for path in &self.runtime_dependencies {
            outcome.registrations.add_runtime_dependency(path.clone());
        }

        Ok(outcome)
    }
}

/// Provision `packages` for `platform` into `<project_root>/Binaries/<platform>`
pub fn provision(
    platform: TargetPlatform,
    project_root: &Path,
    packages: &[ThirdPartyPackage],
) -> Result<RegistrationSet> {
    Provisioner::for_project(platform, project_root)
        .provision_all(packages)
        .map(|outcome| outcome.registrations)
}
