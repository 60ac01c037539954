//! Search for `<name>.modinfo` across the usual install locations.

use tracing::{debug, trace, warn};

use super::descriptor::ModuleDescriptor;
use super::error::ModuleError;
use crate::paths::{PATH_DELIMITER, env_var, split_path_list, trim_path};
use crate::ports::PathProbePort;
use crate::resolver::Locator;

/// Environment variable holding extra module search directories.
pub const MODULE_PATH_ENV: &str = "CPPLOCATE_PATH";

/// File extension of module descriptors.
pub const MODULE_INFO_EXTENSION: &str = "modinfo";

/// Load `<directory>/<name>.modinfo`, if present and readable.
///
/// `directory` is trimmed of spaces and trailing delimiters first. An empty
/// directory is skipped rather than read as the filesystem root.
pub fn load_module(directory: &str, name: &str) -> Option<ModuleDescriptor> {
    let directory = trim_path(directory);
    if directory.is_empty() {
        return None;
    }

    let path = format!("{directory}{PATH_DELIMITER}{name}.{MODULE_INFO_EXTENSION}");
    match ModuleDescriptor::from_file(&path) {
        Ok(descriptor) => {
            debug!(path = %path, "Loaded module descriptor");
            Some(descriptor)
        }
        Err(ModuleError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            trace!(path = %path, "No module descriptor");
            None
        }
        Err(e) => {
            warn!(error = %e, "Skipping unreadable module descriptor");
            None
        }
    }
}

impl<P: PathProbePort> Locator<P> {
    /// Find and load the descriptor for module `name`.
    ///
    /// Search order, first readable file wins:
    /// 1. `<module_path>/<name>.modinfo`
    /// 2. for each directory `d` in `CPPLOCATE_PATH`: `d/<name>.modinfo`, then
    ///    `d/<name>/<name>.modinfo`
    /// 3. `/usr/share/<name>/` and `/usr/local/share/<name>/`, or on Windows
    ///    `%ProgramFiles%\<name>\` and `%ProgramFiles(x86)%\<name>\`
    ///
    /// Returns an empty descriptor when nothing is found.
    pub fn find_module(&self, name: &str) -> ModuleDescriptor {
        let search_path = env_var(MODULE_PATH_ENV).unwrap_or_default();
        self.find_module_in(name, &search_path)
    }

    /// Like [`find_module`](Self::find_module), with an explicit search-path
    /// list in place of `CPPLOCATE_PATH`.
    pub fn find_module_in(&self, name: &str, search_path: &str) -> ModuleDescriptor {
        if name.is_empty() {
            return ModuleDescriptor::new();
        }

        if let Some(descriptor) = load_module(&self.module_path(), name) {
            return descriptor;
        }

        for directory in split_path_list(search_path) {
            if let Some(descriptor) = load_module(&directory, name) {
                return descriptor;
            }

            let nested = format!("{}{PATH_DELIMITER}{name}", trim_path(&directory));
            if let Some(descriptor) = load_module(&nested, name) {
                return descriptor;
            }
        }

        for root in standard_roots() {
            if let Some(descriptor) = load_module(&format!("{root}{PATH_DELIMITER}{name}"), name) {
                return descriptor;
            }
        }

        debug!(module = name, "Module not found");
        ModuleDescriptor::new()
    }
}

#[cfg(windows)]
fn standard_roots() -> Vec<String> {
    ["ProgramFiles", "ProgramFiles(x86)"]
        .into_iter()
        .filter_map(env_var)
        .map(|root| trim_path(&root).to_string())
        .filter(|root| !root.is_empty())
        .collect()
}

#[cfg(not(windows))]
fn standard_roots() -> Vec<String> {
    vec!["/usr/share".to_string(), "/usr/local/share".to_string()]
}
