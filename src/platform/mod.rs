//! Build platforms and their native library layouts
//!
//! This module handles:
//! - The closed set of build platforms the host build system can target
//! - Platform profiles: where a package keeps its libraries for a platform and
//!   which file suffixes mark static, dynamic and plugin libraries
//! - Profile lookup (via the registry module)
//!
//! Platforms without a profile are valid build targets that simply carry no
//! native libraries. Resolving them yields `None`, never an error.

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{self, NativeDepsError};
use crate::path_utils::has_suffix_ignore_ascii_case;

pub mod registry;

pub use registry::{all_profiles, resolve};

/// A build platform known to the host build system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    Win64,
    Linux,
    LinuxArm64,
    Mac,
    IOS,
    Android,
}

impl TargetPlatform {
    /// Every known platform, in display order
    pub const ALL: [TargetPlatform; 6] = [
        TargetPlatform::Win64,
        TargetPlatform::Linux,
        TargetPlatform::LinuxArm64,
        TargetPlatform::Mac,
        TargetPlatform::IOS,
        TargetPlatform::Android,
    ];

    /// Name used by the build system, also the `Binaries/<name>` directory
    pub fn as_str(self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "Win64",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::LinuxArm64 => "LinuxArm64",
            TargetPlatform::Mac => "Mac",
            TargetPlatform::IOS => "IOS",
            TargetPlatform::Android => "Android",
        }
    }

    /// Profile for this platform, if it has native libraries at all
    pub fn profile(self) -> Option<&'static PlatformProfile> {
        resolve(self)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = NativeDepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let platform = match normalized.as_str() {
            "win64" | "windows" => TargetPlatform::Win64,
            "linux" | "linuxx64" => TargetPlatform::Linux,
            "linuxarm64" | "linuxaarch64" => TargetPlatform::LinuxArm64,
            "mac" | "macos" => TargetPlatform::Mac,
            "ios" => TargetPlatform::IOS,
            "android" => TargetPlatform::Android,
            _ => return Err(error::platform::unknown(s)),
        };
        Ok(platform)
    }
}

/// Filesystem conventions for one platform's native libraries
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Platform this profile belongs to
    pub platform: TargetPlatform,

    /// Path components under `<package>/libraries` (e.g. `["Linux", "arm64"]`)
    pub subdirectory: &'static [&'static str],

    /// Suffix of libraries passed to the linker (e.g. ".lib")
    pub static_suffix: &'static str,

    /// Suffix of libraries staged next to the binaries (e.g. ".dll")
    pub dynamic_suffix: &'static str,

    /// Suffixes accepted in a package's plugin directory
    pub plugin_suffixes: &'static [&'static str],
}

impl PlatformProfile {
    /// Relative library directory as a native path
    pub fn subdirectory_path(&self) -> PathBuf {
        self.subdirectory.iter().collect()
    }

    /// Relative library directory with forward slashes, for display
    pub fn subdirectory_display(&self) -> String {
        self.subdirectory.join("/")
    }

    pub fn is_static(&self, file_name: &OsStr) -> bool {
        has_suffix_ignore_ascii_case(file_name, self.static_suffix)
    }

    pub fn is_dynamic(&self, file_name: &OsStr) -> bool {
        has_suffix_ignore_ascii_case(file_name, self.dynamic_suffix)
    }

    pub fn is_plugin(&self, file_name: &OsStr) -> bool {
        self.plugin_suffixes
            .iter()
            .any(|suffix| has_suffix_ignore_ascii_case(file_name, suffix))
    }
}
