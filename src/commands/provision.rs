//! Provision command implementation
//!
//! Loads nativedeps.yaml, runs the pipeline for the requested platform and
//! writes the registrations as JSON. The per-package summary goes to stderr
//! so stdout stays machine-readable.

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::ProvisionArgs;
use nativedeps::config::{CONFIG_FILE, ProvisionConfig};
use nativedeps::error::{Result, fs as fs_error};
use nativedeps::path_utils::{normalize, to_forward_slashes};
use nativedeps::provision::{PackageReport, ProvisionOutcome, Provisioner};

/// Run provision command
pub fn run(args: ProvisionArgs) -> Result<()> {
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = ProvisionConfig::load(&config_path)?;

    let project_root = args
        .project_root
        .map_or_else(|| config.project_root(), |root| normalize(&root));

    let provisioner = Provisioner::for_project(args.platform, &project_root)
        .with_dry_run(args.dry_run)
        .with_runtime_dependencies(config.runtime_dependencies(&project_root));

    let outcome = provisioner.provision_all(&config.packages())?;
    print_summary(&provisioner, &outcome, args.dry_run);

    let json = outcome.registrations.to_json()?;
    match args.output {
        Some(path) => write_registrations(&path, &json)?,
        None => println!("{json}"),
    }

    Ok(())
}

fn print_summary(provisioner: &Provisioner, outcome: &ProvisionOutcome, dry_run: bool) {
    let heading = Style::new().bold().green();
    let name = Style::new().bold().yellow();

    eprintln!(
        "{} {} -> {}",
        heading.apply_to(if dry_run { "Dry run" } else { "Provisioned" }),
        provisioner.platform(),
        to_forward_slashes(provisioner.output_dir())
    );

    for report in &outcome.packages {
        eprintln!(
            "  {} {}",
            name.apply_to(&report.package),
            package_status(report, dry_run)
        );
    }
}

/// Status text following the package name in the summary
fn package_status(report: &PackageReport, dry_run: bool) -> String {
    if !report.supported {
        return Style::new()
            .dim()
            .apply_to("skipped (no native libraries for this platform)")
            .to_string();
    }
    if dry_run {
        return format!(
            "{} located, {} would be staged",
            report.located,
            report.staged.len()
        );
    }
    format!(
        "{} located, {} staged, {} already present",
        report.located,
        report.copied(),
        report.not_copied()
    )
}

fn write_registrations(path: &Path, json: &str) -> Result<()> {
    let write_failed = |e: std::io::Error| fs_error::write_failed(path.display().to_string(), e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }
    fs::write(path, format!("{json}\n")).map_err(write_failed)
}
