//! Module descriptors and their lookup.
//!
//! A module is a named, separately installed component that ships a
//! `<name>.modinfo` file describing itself.

mod descriptor;
mod error;
mod finder;

pub use descriptor::{MODULE_PATH_TOKEN, ModuleDescriptor};
pub use error::ModuleError;
pub use finder::{MODULE_INFO_EXTENSION, MODULE_PATH_ENV, load_module};
