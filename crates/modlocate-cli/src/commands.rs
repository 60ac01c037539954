//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
///
/// Each command answers one lookup for the running `modlocate` process.
#[derive(Subcommand)]
pub enum Commands {
    /// Show all resolved process paths
    Paths {
        /// Application name used for the config directory
        #[arg(long, default_value = "modlocate")]
        application: String,
    },

    /// Print the path of this executable
    Exe,

    /// Print the directory containing this executable
    ModuleDir,

    /// Print the application bundle root (macOS only)
    Bundle,

    /// Print the path of the library containing modlocate's own code
    Library,

    /// Find the base directory from which a relative path exists
    Locate {
        /// Relative path to look for (e.g., "share/app/logo.png")
        relative_path: String,
        /// Subdirectory to try below system prefixes (e.g., "share/app")
        #[arg(long, default_value = "")]
        system_dir: String,
        /// Also search relative to the library containing modlocate's code
        #[arg(long)]
        library: bool,
    },

    /// Find and print a module descriptor
    Find {
        /// Module name; the file looked for is <name>.modinfo
        name: String,
        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
        /// Also write the descriptor to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
}
