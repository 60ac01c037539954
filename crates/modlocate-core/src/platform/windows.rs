//! Module-handle introspection for Windows targets.

use std::ffi::c_void;

use tracing::trace;
use windows::Win32::Foundation::{HMODULE, MAX_PATH};
use windows::Win32::System::LibraryLoader::{
    GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS, GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
    GetModuleFileNameW, GetModuleHandleExW,
};
use windows::core::PCWSTR;

/// Longest path `GetModuleFileNameW` can return with long-path support enabled.
const MAX_LONG_PATH: usize = 32_768;

/// Resolve the file of the module that contains `symbol`.
#[allow(unsafe_code)]
pub(super) fn library_path(symbol: *const c_void) -> Option<String> {
    if symbol.is_null() {
        return None;
    }

    let mut module = HMODULE::default();

    // SAFETY: with FROM_ADDRESS the "name" argument is treated as an address
    // inside a module and is not read as a string. UNCHANGED_REFCOUNT means no
    // handle is acquired, so nothing needs to be released.
    let found = unsafe {
        GetModuleHandleExW(
            GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS | GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
            PCWSTR(symbol.cast()),
            &mut module,
        )
    };
    if let Err(e) = found {
        trace!(error = %e, "No module contains address");
        return None;
    }

    module_file_name(module)
}

#[allow(unsafe_code)]
fn module_file_name(module: HMODULE) -> Option<String> {
    let mut capacity = MAX_PATH as usize;

    loop {
        let mut buffer = vec![0u16; capacity];

        // SAFETY: `buffer` is valid for `capacity` UTF-16 units.
        let len = unsafe { GetModuleFileNameW(module, &mut buffer) } as usize;
        if len == 0 {
            return None;
        }
        // A full buffer means the name was truncated.
        if len < capacity {
            return Some(String::from_utf16_lossy(&buffer[..len]));
        }
        if capacity >= MAX_LONG_PATH {
            trace!(capacity, "Module file name exceeds the long-path limit");
            return None;
        }

        capacity = next_capacity(capacity);
    }
}

/// Double the buffer, with the last attempt made at exactly `MAX_LONG_PATH`.
const fn next_capacity(capacity: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    if doubled < MAX_LONG_PATH {
        doubled
    } else {
        MAX_LONG_PATH
    }
}
