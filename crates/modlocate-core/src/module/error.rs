//! Module descriptor error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a `.modinfo` descriptor.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The descriptor file could not be opened or read.
    #[error("Failed to read module descriptor {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The descriptor file could not be created or written.
    #[error("Failed to write module descriptor {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
