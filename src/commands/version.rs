//! Version command implementation

use nativedeps::error::Result;
use nativedeps::platform::all_profiles;

/// Run version command
pub fn run() -> Result<()> {
    println!("nativedeps {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Platform profiles: {}", all_profiles().len());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
