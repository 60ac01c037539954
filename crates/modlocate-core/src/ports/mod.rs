//! Port definitions for platform introspection.
//!
//! Ports are the seam between pure search logic and the operating system.
//! The native implementation lives in `crate::platform`.

mod path_probe;

pub use path_probe::PathProbePort;
