//! Staging of dynamic libraries into the output binary directory
//!
//! Destinations are `<output dir>/<file name>`. A destination that already
//! exists is left alone: no timestamp or content comparison is made, so an
//! updated library with an unchanged name is only picked up after the output
//! directory is cleared. Two sources with the same file name map to the same
//! destination; whichever is staged first stays.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::{ArtifactReference, StagingRecord};
use crate::error::{Result, staging};

/// Copies artifacts into one output directory
#[derive(Debug, Clone)]
pub struct Stager {
    output_dir: PathBuf,
    dry_run: bool,
}

impl Stager {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// In dry-run mode destinations are computed but nothing is written
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination of `source` inside the output directory
    pub fn destination_for(&self, source: &Path) -> Result<PathBuf> {
        let file_name = source
            .file_name()
            .ok_or_else(|| staging::invalid_artifact(source.display().to_string()))?;
        Ok(self.output_dir.join(file_name))
    }

    /// Stage a located artifact
    pub fn stage(&self, artifact: &ArtifactReference) -> Result<StagingRecord> {
        self.stage_path(&artifact.path)
    }

    /// Stage a file by path
    pub fn stage_path(&self, source: &Path) -> Result<StagingRecord> {
        let destination = self.destination_for(source)?;

        if self.dry_run {
            debug!(
                "Dry run: would stage {} to {}",
                source.display(),
                destination.display()
            );
            return Ok(record(source, destination, false));
        }

        ensure_dir(&self.output_dir)?;

        if fs::symlink_metadata(&destination).is_ok() {
            debug!("Already staged: {}", destination.display());
            return Ok(record(source, destination, false));
        }

        fs::copy(source, &destination)
            .map_err(|e| staging::from_copy(source, &destination, &e))?;
        info!("Staged {} to {}", source.display(), destination.display());

        Ok(record(source, destination, true))
    }
}

/// Stage `artifact` into `output_dir`
pub fn stage(artifact: &ArtifactReference, output_dir: &Path) -> Result<StagingRecord> {
    Stager::new(output_dir).stage(artifact)
}

/// Ensure a directory and its ancestors exist
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| staging::from_create_dir(dir, &e))
}

fn record(source: &Path, destination: PathBuf, copied: bool) -> StagingRecord {
    StagingRecord {
        source: source.to_path_buf(),
        destination,
        copied,
    }
}
