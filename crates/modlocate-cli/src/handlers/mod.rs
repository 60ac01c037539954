//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(locator: &Locator<P>, out: &mut impl Write, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Validate CLI-specific input
//!   2. Ask the locator
//!   3. Format output for the terminal
//!
//! An empty answer is reported as `CliError::NotFound` so the exit code
//! tells scripts whether the lookup succeeded.

pub mod find;
pub mod locate;
pub mod paths;
pub mod probe;

/// Address of code compiled into this binary, for library lookups.
pub(crate) fn own_symbol() -> *const std::ffi::c_void {
    let symbol = modlocate_core::find_module as fn(&str) -> modlocate_core::ModuleDescriptor;
    symbol as *const std::ffi::c_void
}
