//! nativedeps - native dependency provisioning
//!
//! Command line front end: parses arguments, sets up logging and dispatches
//! to the command implementations.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Provision(args) => commands::provision::run(args),
        Commands::Resolve(args) => commands::resolve::run(&args),
        Commands::Platforms => commands::platforms::run(),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
