//! Derived path queries on top of a `PathProbePort`.
//!
//! `Locator` turns the raw facts reported by a probe into the directory-level
//! answers callers want: the module directory, the bundle root, and the base
//! directory from which a relative resource path resolves.
//!
//! All answers are plain strings. An empty string means "unknown" and is never
//! treated as the filesystem root or the current directory.

use std::ffi::c_void;
use std::fmt;

use tracing::{debug, trace};

use crate::paths::{
    bundle_part, config_dir, directory_part, file_exists, home_dir, system_base_path,
    unify_delimiters,
};
use crate::platform::NativeProbe;
use crate::ports::PathProbePort;

/// Upward steps tried below each candidate directory, in order.
const PARENT_STEPS: [&str; 3] = ["", "/..", "/../.."];

/// Resource folder of a macOS bundle, relative to the bundle root.
const BUNDLE_RESOURCES: &str = "/Contents/Resources";

/// Path queries answered through a probe.
#[derive(Debug, Clone, Default)]
pub struct Locator<P = NativeProbe> {
    probe: P,
}

impl Locator<NativeProbe> {
    /// Locator for the running process.
    pub const fn native() -> Self {
        Self {
            probe: NativeProbe::new(),
        }
    }
}

impl<P: PathProbePort> Locator<P> {
    /// Locator answering through `probe`.
    pub const fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// The probe this locator queries.
    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Path of the running executable, in native form.
    pub fn executable_path(&self) -> String {
        self.probe.executable_path().unwrap_or_default()
    }

    /// Directory containing the running executable, in native form.
    pub fn module_path(&self) -> String {
        directory_part(&self.executable_path()).to_string()
    }

    /// Root of the application bundle containing the executable, in unified form.
    ///
    /// Empty unless the executable sits in `<bundle>/Contents/MacOS/` on a
    /// platform with bundle conventions.
    pub fn bundle_path(&self) -> String {
        if !self.probe.supports_bundles() {
            return String::new();
        }

        let executable = self.executable_path();
        let directory = unify_delimiters(directory_part(&executable));
        bundle_part(&directory).to_string()
    }

    /// Path of the library containing `symbol`, in unified form.
    ///
    /// A null `symbol` returns `""` without querying the OS.
    pub fn library_path(&self, symbol: *const c_void) -> String {
        if symbol.is_null() {
            return String::new();
        }

        self.probe
            .library_path(symbol)
            .map(|path| unify_delimiters(&path).into_owned())
            .unwrap_or_default()
    }

    /// Find the base directory from which `relative_path` exists.
    ///
    /// Candidates are the library containing `symbol`, the executable's
    /// directory, and the bundle root, in that order; empty candidates are
    /// skipped. For each one the search tries `<dir>`, `<dir>/..`,
    /// `<dir>/../..`, and, when `system_dir` is given and the candidate lies
    /// in a system prefix such as `/usr/lib`, `<prefix>/<system_dir>`. Finally
    /// the bundle's `Contents/Resources` folder is tried.
    ///
    /// The first base under which `relative_path` exists is returned in
    /// unified form, or `""` if there is none.
    pub fn locate_path(
        &self,
        relative_path: &str,
        system_dir: &str,
        symbol: *const c_void,
    ) -> String {
        let library = self.library_path(symbol);
        let library_dir = directory_part(&library);

        let executable = unify_delimiters(&self.executable_path()).into_owned();
        let executable_dir = directory_part(&executable);

        let bundle = self.bundle_path();

        let relative_path = unify_delimiters(relative_path);
        let system_dir = unify_delimiters(system_dir);

        for candidate in [library_dir, executable_dir, bundle.as_str()] {
            if candidate.is_empty() {
                continue;
            }

            if let Some(found) = search_candidate(candidate, &relative_path, &system_dir) {
                return found;
            }
        }

        if !bundle.is_empty() {
            let resources = format!("{bundle}{BUNDLE_RESOURCES}");
            if exists_below(&resources, &relative_path) {
                return resources;
            }
        }

        debug!(relative_path = %relative_path, "Path not found below any candidate");
        String::new()
    }

    /// Resolve the usual set of process paths in one call.
    pub fn process_paths(&self, application: &str) -> ProcessPaths {
        ProcessPaths {
            executable_path: self.executable_path(),
            module_path: self.module_path(),
            bundle_path: self.bundle_path(),
            home_dir: home_dir(),
            config_dir: config_dir(application),
        }
    }
}

fn search_candidate(candidate: &str, relative_path: &str, system_dir: &str) -> Option<String> {
    for step in PARENT_STEPS {
        let base = format!("{candidate}{step}");
        if exists_below(&base, relative_path) {
            return Some(base);
        }
    }

    if system_dir.is_empty() {
        return None;
    }

    // The suffix table expects a delimiter after `lib`/`bin`.
    let with_delimiter = format!("{candidate}/");
    let prefix = system_base_path(&with_delimiter);
    if prefix.is_empty() {
        return None;
    }

    let base = format!("{prefix}/{system_dir}");
    exists_below(&base, relative_path).then_some(base)
}

fn exists_below(base: &str, relative_path: &str) -> bool {
    let full = format!("{base}/{relative_path}");
    let exists = file_exists(&full);
    if exists {
        debug!(base, relative_path, "Located path");
    } else {
        trace!(path = %full, "Candidate does not exist");
    }
    exists
}

/// Snapshot of the paths relevant to the running process.
///
/// Used by the CLI `paths` command and handy when debugging why a lookup
/// picked the directory it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessPaths {
    /// Path of the running executable
    pub executable_path: String,
    /// Directory containing the executable
    pub module_path: String,
    /// Application bundle root, if any
    pub bundle_path: String,
    /// Current user's home directory
    pub home_dir: String,
    /// Per-application configuration directory
    pub config_dir: String,
}

impl ProcessPaths {
    /// Resolve all paths for the running process.
    pub fn resolve(application: &str) -> Self {
        Locator::native().process_paths(application)
    }
}

impl fmt::Display for ProcessPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn shown(value: &str) -> &str {
            if value.is_empty() { "<none>" } else { value }
        }

        writeln!(f, "executable_path = {}", shown(&self.executable_path))?;
        writeln!(f, "module_path = {}", shown(&self.module_path))?;
        writeln!(f, "bundle_path = {}", shown(&self.bundle_path))?;
        writeln!(f, "home_dir = {}", shown(&self.home_dir))?;
        write!(f, "config_dir = {}", shown(&self.config_dir))
    }
}
