//! Paths command handler.
//!
//! Displays all resolved process paths for diagnostics and debugging.

use std::io::Write;

use anyhow::Result;
use modlocate_core::Locator;
use modlocate_core::ports::PathProbePort;

/// Execute the paths command.
///
/// Resolves and displays the process paths in `key = value` format.
pub fn execute<P: PathProbePort>(
    locator: &Locator<P>,
    out: &mut impl Write,
    application: &str,
) -> Result<()> {
    let paths = locator.process_paths(application);
    writeln!(out, "{paths}")?;
    Ok(())
}
