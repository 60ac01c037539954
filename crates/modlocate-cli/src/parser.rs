//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use modlocate_core::module::MODULE_PATH_ENV;

use crate::commands::Commands;

/// Command-line interface for locating executables, resources and modules.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "modlocate")]
#[command(about = "Locate the running program, its resources and installed modules")]
#[command(version)]
pub struct Cli {
    /// Extra module search directories, separated like PATH
    #[arg(long = "module-path", global = true, env = MODULE_PATH_ENV)]
    pub module_path: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
