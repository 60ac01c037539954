//! Command-line front end for `modlocate-core`.
//!
//! `main.rs` parses arguments, installs logging and dispatches to
//! [`run`]; everything else lives here so it can be tested.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

use std::io::Write;

use anyhow::Result;
use modlocate_core::Locator;
use modlocate_core::ports::PathProbePort;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;

use handlers::find::FindOptions;
use handlers::probe::ProbeTarget;

/// Dispatch `command` against `locator`, writing results to `out`.
pub fn run<P: PathProbePort>(
    locator: &Locator<P>,
    out: &mut impl Write,
    command: Commands,
    module_path: Option<&str>,
) -> Result<()> {
    match command {
        Commands::Paths { application } => handlers::paths::execute(locator, out, &application),
        Commands::Exe => handlers::probe::execute(locator, out, ProbeTarget::Executable),
        Commands::ModuleDir => handlers::probe::execute(locator, out, ProbeTarget::ModuleDir),
        Commands::Bundle => handlers::probe::execute(locator, out, ProbeTarget::Bundle),
        Commands::Library => handlers::probe::execute(locator, out, ProbeTarget::Library),
        Commands::Locate {
            relative_path,
            system_dir,
            library,
        } => handlers::locate::execute(locator, out, &relative_path, &system_dir, library),
        Commands::Find { name, json, save } => {
            let options = FindOptions {
                search_path: module_path,
                json,
                save: save.as_deref(),
            };
            handlers::find::execute(locator, out, &name, &options)
        }
    }
}
