//! Locate command handler.

use std::io::Write;

use anyhow::Result;
use modlocate_core::Locator;
use modlocate_core::ports::PathProbePort;
use tracing::debug;

use crate::error::CliError;

use super::own_symbol;

/// Execute the locate command.
///
/// Prints the base directory from which `relative_path` exists. With
/// `use_library`, the library holding modlocate's own code is searched first.
pub fn execute<P: PathProbePort>(
    locator: &Locator<P>,
    out: &mut impl Write,
    relative_path: &str,
    system_dir: &str,
    use_library: bool,
) -> Result<()> {
    if relative_path.trim().is_empty() {
        return Err(CliError::Arguments("relative path must not be empty".to_string()).into());
    }

    let symbol = if use_library {
        own_symbol()
    } else {
        std::ptr::null()
    };

    let base = locator.locate_path(relative_path, system_dir, symbol);
    if base.is_empty() {
        return Err(CliError::NotFound(format!("Could not locate {relative_path}")).into());
    }

    debug!(base = %base, relative_path, "Located");
    writeln!(out, "{base}")?;
    Ok(())
}
