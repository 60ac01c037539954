//! Path probe port for process and library introspection.
//!
//! # Design Notes
//!
//! - The port reports raw facts only: where the executable and a library live
//! - Failure is `None`; the locator turns it into an empty path for callers
//! - Derived answers (module directory, bundle root, search results) are
//!   computed by `Locator` on top of whichever probe it holds

use std::ffi::c_void;

/// Port for asking the operating system where code is running from.
///
/// # Example
///
/// ```ignore
/// use modlocate_core::ports::PathProbePort;
///
/// fn report(probe: &dyn PathProbePort) {
///     let exe = probe.executable_path();
///     // ...
/// }
/// ```
pub trait PathProbePort: Send + Sync {
    /// Absolute, symlink-resolved path of the running executable.
    fn executable_path(&self) -> Option<String>;

    /// Path of the loaded module (executable or shared library) containing `symbol`.
    ///
    /// Callers guarantee `symbol` is non-null.
    fn library_path(&self, symbol: *const c_void) -> Option<String>;

    /// Whether executables may live inside `.app/Contents/MacOS` bundles.
    fn supports_bundles(&self) -> bool {
        cfg!(target_os = "macos")
    }
}
