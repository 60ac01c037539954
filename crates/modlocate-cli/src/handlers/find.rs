//! Find command handler.
//!
//! Looks up a module descriptor and prints it in its own `key: value` format
//! or as JSON, optionally saving a copy.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use modlocate_core::Locator;
use modlocate_core::ports::PathProbePort;

use crate::error::CliError;

/// Options for the find command.
#[derive(Debug, Default)]
pub struct FindOptions<'a> {
    /// Search-path list replacing `CPPLOCATE_PATH`, if given
    pub search_path: Option<&'a str>,
    /// Print JSON instead of `key: value` lines
    pub json: bool,
    /// Write the descriptor to this file as well
    pub save: Option<&'a Path>,
}

/// Execute the find command.
pub fn execute<P: PathProbePort>(
    locator: &Locator<P>,
    out: &mut impl Write,
    name: &str,
    options: &FindOptions<'_>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Arguments("module name must not be empty".to_string()).into());
    }

    let descriptor = match options.search_path {
        Some(search_path) => locator.find_module_in(name, search_path),
        None => locator.find_module(name),
    };

    if descriptor.is_empty() {
        return Err(CliError::NotFound(format!("Module '{name}' not found")).into());
    }

    if let Some(path) = options.save {
        descriptor
            .save(path)
            .map_err(|e| CliError::Io(e.to_string()))
            .with_context(|| format!("Saving descriptor of '{name}'"))?;
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &descriptor)?;
        writeln!(out)?;
    } else {
        write!(out, "{descriptor}")?;
    }

    Ok(())
}
