//! Native implementation of `PathProbePort`.
//!
//! Exactly one of the `unix` / `windows` submodules is compiled for a target.
//! The executable path comes from `std::env::current_exe`, which already wraps
//! the per-OS mechanism (`/proc/self/exe`, `_NSGetExecutablePath`, sysctl,
//! `GetModuleFileNameW`); it is canonicalized and cached for the process.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use std::env;
use std::ffi::c_void;
use std::sync::OnceLock;

use tracing::debug;

use crate::ports::PathProbePort;

static EXECUTABLE_PATH: OnceLock<Option<String>> = OnceLock::new();

/// Probe backed by the running operating system.
///
/// Constructed by `Locator::native()`; carries no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl NativeProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl PathProbePort for NativeProbe {
    fn executable_path(&self) -> Option<String> {
        EXECUTABLE_PATH.get_or_init(obtain_executable_path).clone()
    }

    fn library_path(&self, symbol: *const c_void) -> Option<String> {
        #[cfg(unix)]
        let path = unix::library_path(symbol);
        #[cfg(windows)]
        let path = windows::library_path(symbol);
        #[cfg(not(any(unix, windows)))]
        let path = {
            let _ = symbol;
            None
        };

        path
    }
}

fn obtain_executable_path() -> Option<String> {
    let path = match env::current_exe().and_then(|exe| exe.canonicalize()) {
        Ok(path) => path,
        Err(e) => {
            debug!(error = %e, "Cannot determine executable path");
            return None;
        }
    };

    let path = strip_verbatim_prefix(path.to_string_lossy().into_owned());
    (!path.is_empty()).then_some(path)
}

/// `canonicalize` on Windows yields `\\?\C:\...`; callers expect a plain drive path.
#[cfg(windows)]
fn strip_verbatim_prefix(path: String) -> String {
    if let Some(rest) = path.strip_prefix(r"\\?\UNC\") {
        format!(r"\\{rest}")
    } else if let Some(rest) = path.strip_prefix(r"\\?\") {
        rest.to_string()
    } else {
        path
    }
}

#[cfg(not(windows))]
const fn strip_verbatim_prefix(path: String) -> String {
    path
}
