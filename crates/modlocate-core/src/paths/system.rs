//! Recognition of conventional install layouts.
//!
//! Two layouts matter for resource lookup: UNIX system prefixes (`/usr`,
//! `/usr/local`, possibly below a sysroot) and macOS application bundles.

/// Install suffixes paired with the length of the prefix part that is kept.
///
/// `"/usr"` is 4 bytes, `"/usr/local"` is 10.
const SYSTEM_SUFFIXES: [(&str, usize); 8] = [
    ("/usr/bin/", 4),
    ("/usr/lib/", 4),
    ("/usr/lib32/", 4),
    ("/usr/lib64/", 4),
    ("/usr/local/bin/", 10),
    ("/usr/local/lib/", 10),
    ("/usr/local/lib32/", 10),
    ("/usr/local/lib64/", 10),
];

/// Trailing directory components of an executable inside an app bundle.
const BUNDLE_SUFFIX: &str = "/Contents/MacOS";

/// Return the system prefix of `path` if it lies in a UNIX install location.
///
/// The path must contain one of `/usr/bin/`, `/usr/lib/`, `/usr/lib32/`,
/// `/usr/lib64/` or their `/usr/local` counterparts. The returned prefix ends
/// with `usr` or `usr/local`, keeping any sysroot in front of it. When several
/// suffixes occur the rightmost occurrence wins. Returns `""` when nothing
/// matches.
///
/// ```
/// use modlocate_core::paths::system_base_path;
///
/// assert_eq!(system_base_path("/usr/lib/mylib.so"), "/usr");
/// assert_eq!(system_base_path("/usr/local/lib64/x.so"), "/usr/local");
/// assert_eq!(system_base_path("/crosscompile/armv4/usr/lib/mylib.so.2"), "/crosscompile/armv4/usr");
/// assert_eq!(system_base_path("relative/path"), "");
/// ```
pub fn system_base_path(path: &str) -> &str {
    SYSTEM_SUFFIXES
        .iter()
        .filter_map(|(suffix, keep)| path.rfind(suffix).map(|pos| pos + keep))
        .max()
        .map_or("", |end| &path[..end])
}

/// Return the bundle root if `directory` is the `Contents/MacOS` folder of a bundle.
///
/// `directory` is the directory that holds the executable, in unified form.
/// The match on `Contents/MacOS` is case-sensitive and must cover the last two
/// components exactly. Returns `""` otherwise.
pub fn bundle_part(directory: &str) -> &str {
    match directory.strip_suffix(BUNDLE_SUFFIX) {
        Some(root) if !root.is_empty() => root,
        _ => "",
    }
}
