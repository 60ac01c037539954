//! Per-user directories.
//!
//! Environment variables take precedence so that a process can be pointed at
//! a different home or config root without touching the account database.
//! Results are in unified form and are never created on disk.

use super::env::env_var;
use super::strings::{trim_path, unify_delimiters};

/// Return the current user's home directory, or `""` when it cannot be determined.
///
/// Resolution order:
/// 1. `HOME`
/// 2. `HOMEDRIVE` + `HOMEPATH`, then `USERPROFILE` (Windows only)
/// 3. The platform account database via `dirs::home_dir`
pub fn home_dir() -> String {
    let raw = env_var("HOME")
        .or_else(windows_home)
        .or_else(|| dirs::home_dir().map(|path| path.to_string_lossy().into_owned()))
        .unwrap_or_default();

    trim_path(&unify_delimiters(&raw)).to_string()
}

#[cfg(windows)]
fn windows_home() -> Option<String> {
    match (env_var("HOMEDRIVE"), env_var("HOMEPATH")) {
        (Some(drive), Some(path)) => Some(format!("{drive}{path}")),
        _ => env_var("USERPROFILE"),
    }
}

#[cfg(not(windows))]
const fn windows_home() -> Option<String> {
    None
}

/// Return the configuration directory for `application`, or `""` when unknown.
///
/// - Windows: `%APPDATA%/<application>`
/// - macOS: `<home>/Library/Preferences/<application>`
/// - other UNIX: `$XDG_CONFIG_HOME/<application>`, else `<home>/.config/<application>`
///
/// An empty `application` yields the base directory itself.
pub fn config_dir(application: &str) -> String {
    let base = config_base();
    if base.is_empty() {
        return String::new();
    }

    let application = trim_path(application);
    if application.is_empty() {
        base
    } else {
        format!("{base}/{}", unify_delimiters(application))
    }
}

#[cfg(windows)]
fn config_base() -> String {
    env_var("APPDATA")
        .map(|appdata| trim_path(&unify_delimiters(&appdata)).to_string())
        .unwrap_or_default()
}

#[cfg(target_os = "macos")]
fn config_base() -> String {
    let home = home_dir();
    if home.is_empty() {
        return home;
    }
    format!("{home}/Library/Preferences")
}

#[cfg(all(not(windows), not(target_os = "macos")))]
fn config_base() -> String {
    if let Some(xdg) = env_var("XDG_CONFIG_HOME") {
        return trim_path(&xdg).to_string();
    }

    let home = home_dir();
    if home.is_empty() {
        return home;
    }
    format!("{home}/.config")
}
