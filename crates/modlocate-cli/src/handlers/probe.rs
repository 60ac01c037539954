//! Single-value lookups: executable, module directory, bundle and library.

use std::io::Write;

use anyhow::Result;
use modlocate_core::Locator;
use modlocate_core::ports::PathProbePort;

use crate::error::CliError;

use super::own_symbol;

/// Which single path to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTarget {
    Executable,
    ModuleDir,
    Bundle,
    Library,
}

impl ProbeTarget {
    const fn label(self) -> &'static str {
        match self {
            Self::Executable => "executable path",
            Self::ModuleDir => "module directory",
            Self::Bundle => "bundle path",
            Self::Library => "library path",
        }
    }
}

/// Print one path, failing with `NotFound` when it is unknown.
pub fn execute<P: PathProbePort>(
    locator: &Locator<P>,
    out: &mut impl Write,
    target: ProbeTarget,
) -> Result<()> {
    let path = match target {
        ProbeTarget::Executable => locator.executable_path(),
        ProbeTarget::ModuleDir => locator.module_path(),
        ProbeTarget::Bundle => locator.bundle_path(),
        ProbeTarget::Library => locator.library_path(own_symbol()),
    };

    if path.is_empty() {
        return Err(CliError::NotFound(format!("No {} available", target.label())).into());
    }

    writeln!(out, "{path}")?;
    Ok(())
}
