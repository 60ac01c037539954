//! In-memory form of a `.modinfo` file.
//!
//! The file format is one `key: value` pair per line. Lines without a colon are
//! ignored. A value may reference the directory that holds the file through the
//! `${ModulePath}` token, which is expanded at load time.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ModuleError;
use crate::paths::directory_part;

/// Token in a value that expands to the descriptor's own directory.
pub const MODULE_PATH_TOKEN: &str = "${ModulePath}";

/// Key/value description of an installed module.
///
/// Keys are unique and iterate in sorted order. An empty descriptor is the
/// "not found" result of [`find_module`](crate::find_module).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleDescriptor {
    values: BTreeMap<String, String>,
}

impl ModuleDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a descriptor from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModuleError> {
        let mut descriptor = Self::new();
        descriptor.load(path)?;
        Ok(descriptor)
    }

    /// Parse descriptor text, expanding `${ModulePath}` to `module_dir`.
    ///
    /// A line is split at its first `:`; key and value are trimmed. Later
    /// lines overwrite earlier ones with the same key.
    pub fn parse(contents: &str, module_dir: &str) -> Self {
        Self::from_lines(contents.lines(), module_dir)
    }

    fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>, module_dir: &str) -> Self {
        let mut descriptor = Self::new();

        for line in lines {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let value = value.trim();
            let value = if value.contains(MODULE_PATH_TOKEN) {
                value.replace(MODULE_PATH_TOKEN, module_dir)
            } else {
                value.to_string()
            };

            descriptor.set_value(key.trim(), value);
        }

        descriptor
    }

    /// Replace the contents with the descriptor stored at `path`.
    ///
    /// The descriptor is cleared first and stays empty when the file cannot be
    /// read. Lines that are not valid UTF-8 are skipped like any other
    /// malformed line.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ModuleError> {
        let path = path.as_ref();
        self.clear();

        let bytes = fs::read(path).map_err(|source| ModuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = bytes
            .split(|&byte| byte == b'\n')
            .filter_map(|line| std::str::from_utf8(line).ok());

        let filename = path.to_string_lossy();
        *self = Self::from_lines(lines, directory_part(&filename));
        Ok(())
    }

    /// Write the descriptor to `path`, one `key: value` line per entry.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModuleError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| ModuleError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Whether the descriptor holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries, sorted by key.
    pub const fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Look up `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up `key`, falling back to `default` when it is absent.
    pub fn value<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.values {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModuleDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut descriptor = Self::new();
        for (key, value) in iter {
            descriptor.set_value(key, value);
        }
        descriptor
    }
}
