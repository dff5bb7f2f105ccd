//! Configuration file handling
//!
//! `nativedeps.yaml` lists the vendored packages of a project and where to
//! find them. Relative paths in the file resolve against the directory that
//! contains it.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::package::THIRD_PARTY_DIR;
use crate::domain::{SearchMode, ThirdPartyPackage};
use crate::error::{Result, config};
use crate::path_utils::normalize;

/// Default config filename
pub const CONFIG_FILE: &str = "nativedeps.yaml";

/// Placeholder for the project root in runtime dependency entries
pub const PROJECT_DIR_VAR: &str = "$(ProjectDir)";

/// Provisioning configuration from nativedeps.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionConfig {
    /// Project root; `Binaries/<platform>` is created below it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    /// Module directory; packages default to `<module_dir>/../../ThirdParty/<name>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_dir: Option<PathBuf>,

    /// Directory holding packages, takes precedence over `module_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_party_dir: Option<PathBuf>,

    /// Vendored packages, provisioned in this order
    #[serde(default)]
    pub packages: Vec<PackageEntry>,

    /// Extra files shipped with the product (may use `$(ProjectDir)`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_dependencies: Vec<String>,

    /// Directory the config was loaded from
    #[serde(skip)]
    base_dir: PathBuf,
}

/// A package declaration in nativedeps.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageEntry {
    /// Package name (also its directory name under ThirdParty)
    pub name: String,

    /// Explicit package root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Plugin directory inside the platform library directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_dir: Option<PathBuf>,

    #[serde(default)]
    pub search: SearchMode,
}

impl ProvisionConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(config)
    }

    /// Validate package declarations
    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(config::invalid("no packages declared"));
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            if package.name.trim().is_empty() {
                return Err(config::invalid("package name cannot be empty"));
            }
            if !seen.insert(package.name.as_str()) {
                return Err(config::invalid(format!(
                    "duplicate package '{}'",
                    package.name
                )));
            }
            if let Some(plugin_dir) = &package.plugin_dir {
                let escapes = plugin_dir
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
                if escapes {
                    return Err(config::invalid(format!(
                        "plugin_dir of '{}' must be a relative path inside the library directory",
                        package.name
                    )));
                }
                // `.` or an empty path would alias the library directory itself
                let names_subdir = plugin_dir
                    .components()
                    .any(|c| matches!(c, Component::Normal(_)));
                if !names_subdir {
                    return Err(config::invalid(format!(
                        "plugin_dir of '{}' must name a subdirectory of the library directory",
                        package.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve `path` against the config's directory
    fn resolve(&self, path: &Path) -> PathBuf {
        normalize(&self.base_dir.join(path))
    }

    /// Project root, defaulting to the config's directory
    pub fn project_root(&self) -> PathBuf {
        self.resolve(self.project_root.as_deref().unwrap_or(Path::new(".")))
    }

    /// Packages with their roots resolved
    pub fn packages(&self) -> Vec<ThirdPartyPackage> {
        self.packages
            .iter()
            .map(|entry| {
                let package = match (&entry.path, &self.third_party_dir, &self.module_dir) {
                    (Some(path), _, _) => {
                        ThirdPartyPackage::new(&entry.name, self.resolve(path))
                    }
                    (None, Some(dir), _) => {
                        ThirdPartyPackage::new(&entry.name, self.resolve(&dir.join(&entry.name)))
                    }
                    (None, None, Some(module_dir)) => {
                        ThirdPartyPackage::beside_module(&self.resolve(module_dir), &entry.name)
                    }
                    (None, None, None) => ThirdPartyPackage::new(
                        &entry.name,
                        self.resolve(&Path::new(THIRD_PARTY_DIR).join(&entry.name)),
                    ),
                };
                let package = package.with_search(entry.search);
                match &entry.plugin_dir {
                    Some(dir) => package.with_plugin_dir(dir),
                    None => package,
                }
            })
            .collect()
    }

    /// Runtime dependencies with `$(ProjectDir)` expanded
    pub fn runtime_dependencies(&self, project_root: &Path) -> Vec<PathBuf> {
        let root = project_root.to_string_lossy();
        self.runtime_dependencies
            .iter()
            .map(|entry| self.resolve(Path::new(&entry.replace(PROJECT_DIR_VAR, &root))))
            .collect()
    }
}
