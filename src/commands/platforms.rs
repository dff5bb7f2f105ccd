//! Platforms command implementation
//!
//! Lists every known platform with the library layout it uses, or a note
//! that it ships no native libraries.

use console::Style;

use nativedeps::error::Result;
use nativedeps::platform::{PlatformProfile, TargetPlatform};

/// Run platforms command
pub fn run() -> Result<()> {
    println!("Known platforms ({}):", TargetPlatform::ALL.len());
    println!();

    for platform in TargetPlatform::ALL {
        println!("  {}", Style::new().bold().yellow().apply_to(platform));
        match platform.profile() {
            Some(profile) => print_profile(profile, "    "),
            None => println!("    {}", Style::new().dim().apply_to("no native libraries")),
        }
    }

    Ok(())
}

/// Print the fields of a profile, one per line
pub(crate) fn print_profile(profile: &PlatformProfile, indent: &str) {
    let label = Style::new().bold();
    println!(
        "{indent}{} libraries/{}",
        label.apply_to("Directory:"),
        profile.subdirectory_display()
    );
    println!(
        "{indent}{} {}",
        label.apply_to("Static:"),
        profile.static_suffix
    );
    println!(
        "{indent}{} {}",
        label.apply_to("Dynamic:"),
        profile.dynamic_suffix
    );
    println!(
        "{indent}{} {}",
        label.apply_to("Plugin:"),
        profile.plugin_suffixes.join(", ")
    );
}
