//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging, then hands the command
//! to `modlocate_cli::run` with the native locator.

use std::io;

use clap::{CommandFactory, Parser};
use modlocate_cli::{Cli, exit_code_for, run};
use modlocate_core::Locator;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables before clap reads CPPLOCATE_PATH
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
        }
        return;
    };

    let locator = Locator::native();
    let mut stdout = io::stdout().lock();

    if let Err(err) = run(&locator, &mut stdout, command, cli.module_path.as_deref()) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
