//! Helpers shared by the locator unit tests.
//!
//! `StubProbe` answers probe queries with fixed paths. `ENV_LOCK` and
//! `EnvVarGuard` keep tests that touch `CPPLOCATE_PATH`, `HOME` or the
//! Windows `ProgramFiles` variables from racing each other.

use std::env;
use std::ffi::c_void;
use std::sync::Mutex;

use crate::ports::PathProbePort;

/// Held by every test that reads or writes process environment variables.
///
/// The test harness runs tests on parallel threads while the environment is
/// process-wide.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or removes one variable and puts the prior value back when dropped.
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("CPPLOCATE_PATH", "/tmp/modules");
/// assert!(locator.find_module("widgets").is_empty());
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Point `key` at `value` until the guard drops.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Hide `key` until the guard drops.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(&self.key, value) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Probe with canned answers, for driving `Locator` against temp directories.
#[derive(Debug, Clone, Default)]
pub struct StubProbe {
    executable: Option<String>,
    library: Option<String>,
    bundles: bool,
}

impl StubProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, path: impl Into<String>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn with_library(mut self, path: impl Into<String>) -> Self {
        self.library = Some(path.into());
        self
    }

    pub const fn with_bundles(mut self) -> Self {
        self.bundles = true;
        self
    }
}

impl PathProbePort for StubProbe {
    fn executable_path(&self) -> Option<String> {
        self.executable.clone()
    }

    fn library_path(&self, _symbol: *const c_void) -> Option<String> {
        self.library.clone()
    }

    fn supports_bundles(&self) -> bool {
        self.bundles
    }
}

/// A non-null address for tests; the stub probe never dereferences it.
pub fn dummy_symbol() -> *const c_void {
    std::ptr::NonNull::<u8>::dangling().as_ptr().cast_const().cast()
}
