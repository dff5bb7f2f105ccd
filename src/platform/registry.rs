//! Platform profile table
//!
//! Adding a platform is a data change: append a profile to [`PROFILES`].
//! Platforms missing from the table resolve to `None`.

use super::{PlatformProfile, TargetPlatform};

/// Profiles for every platform that ships native libraries
static PROFILES: [PlatformProfile; 3] = [
    PlatformProfile {
        platform: TargetPlatform::Win64,
        subdirectory: &["Windows"],
        static_suffix: ".lib",
        dynamic_suffix: ".dll",
        plugin_suffixes: &[".lib"],
    },
    PlatformProfile {
        platform: TargetPlatform::Linux,
        subdirectory: &["Linux", "x64"],
        static_suffix: ".so",
        dynamic_suffix: ".so",
        plugin_suffixes: &[".so", ".a"],
    },
    PlatformProfile {
        platform: TargetPlatform::LinuxArm64,
        subdirectory: &["Linux", "arm64"],
        static_suffix: ".so",
        dynamic_suffix: ".so",
        plugin_suffixes: &[".so", ".a"],
    },
];

/// Look up the profile for a platform
pub fn resolve(platform: TargetPlatform) -> Option<&'static PlatformProfile> {
    PROFILES.iter().find(|profile| profile.platform == platform)
}

/// All platforms that have a profile
pub fn all_profiles() -> &'static [PlatformProfile] {
    &PROFILES
}
