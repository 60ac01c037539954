//! Locate the running executable, the libraries it has loaded, and resources
//! and module descriptors installed around them.
//!
//! The free functions in this crate answer for the current process. For
//! testing, or to answer on behalf of a different layout, build a
//! [`Locator`] around your own [`PathProbePort`](ports::PathProbePort).
//!
//! Unknown answers are empty strings rather than errors, so results can be
//! chained without checks; a lookup on an empty base simply finds nothing.
//!
//! ```no_run
//! let base = modlocate_core::locate_path("data/logo.png", "share/viewer", std::ptr::null());
//! if !base.is_empty() {
//!     println!("logo at {base}/data/logo.png");
//! }
//! ```
#![deny(unused_crate_dependencies)]

pub mod module;
pub mod paths;
pub mod platform;
pub mod ports;
pub mod resolver;

#[cfg(test)]
mod test_utils;

use std::ffi::c_void;

// Re-export commonly used types for convenience
pub use module::{ModuleDescriptor, ModuleError};
pub use platform::NativeProbe;
pub use resolver::{Locator, ProcessPaths};

/// Path of the running executable, symlinks resolved, in native form.
///
/// Computed once per process.
pub fn executable_path() -> String {
    Locator::native().executable_path()
}

/// Directory containing the running executable, in native form.
pub fn module_path() -> String {
    Locator::native().module_path()
}

/// Root of the macOS application bundle the executable runs from, or `""`.
pub fn bundle_path() -> String {
    Locator::native().bundle_path()
}

/// Path of the loaded library containing `symbol`, in unified form.
///
/// Pass the address of any function or static defined in the library. Returns
/// `""` for a null or unmapped address.
pub fn library_path(symbol: *const c_void) -> String {
    Locator::native().library_path(symbol)
}

/// Base directory from which `relative_path` can be reached, or `""`.
///
/// See [`Locator::locate_path`] for the search order.
pub fn locate_path(relative_path: &str, system_dir: &str, symbol: *const c_void) -> String {
    Locator::native().locate_path(relative_path, system_dir, symbol)
}

/// Descriptor of module `name`, or an empty descriptor when it is not installed.
///
/// See [`Locator::find_module`] for the search order.
pub fn find_module(name: &str) -> ModuleDescriptor {
    Locator::native().find_module(name)
}
