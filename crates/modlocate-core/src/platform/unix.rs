//! Dynamic-loader introspection for UNIX targets.

use std::ffi::{CStr, c_void};
use std::fs;
use std::mem::MaybeUninit;

use tracing::trace;

/// Resolve the file of the loaded object that contains `symbol` via `dladdr`.
#[allow(unsafe_code)]
pub(super) fn library_path(symbol: *const c_void) -> Option<String> {
    if symbol.is_null() {
        return None;
    }

    let mut info = MaybeUninit::<libc::Dl_info>::zeroed();

    // SAFETY: dladdr only inspects the loader's mapping tables for `symbol`; it
    // never dereferences it. `info` is valid for writes.
    let found = unsafe { libc::dladdr(symbol, info.as_mut_ptr()) };
    if found == 0 {
        trace!(?symbol, "dladdr found no object for address");
        return None;
    }

    // SAFETY: dladdr returned non-zero, so it filled in `info`.
    let info = unsafe { info.assume_init() };
    if info.dli_fname.is_null() {
        return None;
    }

    // SAFETY: dli_fname is a NUL-terminated string owned by the loader and
    // valid while the object stays mapped; it is copied out immediately.
    let name = unsafe { CStr::from_ptr(info.dli_fname) }
        .to_string_lossy()
        .into_owned();
    if name.is_empty() {
        return None;
    }

    // The main program may be reported as it was invoked (argv[0]).
    Some(
        fs::canonicalize(&name)
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or(name),
    )
}
