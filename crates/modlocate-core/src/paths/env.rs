//! Filesystem and environment lookups used by the search routines.

use std::env;
use std::fs;

/// Check whether `path` names an existing file or directory.
///
/// Never fails: an empty path, an embedded NUL or any stat error yields `false`.
pub fn file_exists(path: &str) -> bool {
    !path.is_empty() && fs::metadata(path).is_ok()
}

/// Read an environment variable.
///
/// Returns `None` when the variable is unset, empty, or not valid Unicode.
pub fn env_var(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    env::var(name).ok().filter(|value| !value.is_empty())
}
