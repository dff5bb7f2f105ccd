//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nativedeps::platform::TargetPlatform;

/// nativedeps - native dependency provisioning
///
/// Locate vendored native libraries for a build platform, stage the dynamic
/// ones next to the project's binaries and emit what the linker and the
/// packaging step need to know.
#[derive(Parser, Debug)]
#[command(
    name = "nativedeps",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stage and register vendored native libraries per build platform",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  nativedeps provision --platform Win64\n    \
                  nativedeps provision -p LinuxArm64 --output registrations.json\n    \
                  nativedeps resolve Linux\n    \
                  nativedeps platforms"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage and register native libraries for a platform
    Provision(ProvisionArgs),

    /// Show the library layout of a platform
    Resolve(ResolveArgs),

    /// List known platforms and their library layouts
    Platforms,

    /// Show version information
    Version,
}

/// Arguments for the provision command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Provision using ./nativedeps.yaml:\n    nativedeps provision --platform Win64\n\n\
                   Write the registrations to a file:\n    nativedeps provision -p Linux --output build/native.json\n\n\
                   See what would be staged:\n    nativedeps provision -p Win64 --dry-run")]
pub struct ProvisionArgs {
    /// Target platform (Win64, Linux, LinuxArm64, Mac, IOS, Android)
    #[arg(long, short = 'p', env = "NATIVEDEPS_PLATFORM")]
    pub platform: TargetPlatform,

    /// Config file (defaults to ./nativedeps.yaml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root, overriding the config's project_root
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Write registrations as JSON to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Compute destinations without creating or copying anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Platform to resolve
    pub platform: TargetPlatform,
}
