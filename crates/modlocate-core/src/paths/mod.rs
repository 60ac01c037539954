//! Path string utilities.
//!
//! This module provides the low-level helpers the locator is built from:
//! - Directory extraction, delimiter unification and trimming
//! - Recognition of UNIX system prefixes and macOS bundles
//! - Search-path list splitting
//! - Existence checks and environment lookups
//! - Per-user home and configuration directories
//!
//! # Design
//!
//! - Work on `&str` so that both delimiter styles can be handled in one string
//! - Return borrowed slices where the result is a prefix of the input
//! - Failure is an empty string, never an error

mod env;
mod strings;
mod system;
mod user;

pub use env::{env_var, file_exists};
pub use strings::{
    PATH_DELIMITER, PATH_LIST_DELIMITER, directory_part, join, split, split_path_list, trim_path,
    unify_delimiters,
};
pub use system::{bundle_part, system_base_path};
pub use user::{config_dir, home_dir};
