//! Resolve command implementation

use crate::cli::ResolveArgs;
use nativedeps::error::Result;

use super::platforms::print_profile;

/// Run resolve command
pub fn run(args: &ResolveArgs) -> Result<()> {
    match args.platform.profile() {
        Some(profile) => {
            println!("{}:", args.platform);
            print_profile(profile, "  ");
        }
        None => println!(
            "{} has no native libraries; provisioning is skipped for it",
            args.platform
        ),
    }
    Ok(())
}
