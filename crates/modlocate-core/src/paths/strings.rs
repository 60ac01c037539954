//! Delimiter-aware string helpers for paths.
//!
//! These work on plain `&str` rather than `Path` because they have to cope with
//! both delimiter styles in the same string (a Windows module path handed to
//! code that concatenates with `/`, for example). Nothing here touches the
//! filesystem.

use std::borrow::Cow;

/// Native path delimiter.
#[cfg(windows)]
pub const PATH_DELIMITER: char = '\\';
/// Native path delimiter.
#[cfg(not(windows))]
pub const PATH_DELIMITER: char = '/';

/// Delimiter between entries of a path list such as `PATH`.
#[cfg(windows)]
pub const PATH_LIST_DELIMITER: char = ';';
/// Delimiter between entries of a path list such as `PATH`.
#[cfg(not(windows))]
pub const PATH_LIST_DELIMITER: char = ':';

const fn is_delimiter(c: char) -> bool {
    c == '/' || c == '\\'
}

#[cfg(windows)]
const fn is_native_delimiter(c: char) -> bool {
    is_delimiter(c)
}

#[cfg(not(windows))]
const fn is_native_delimiter(c: char) -> bool {
    c == '/'
}

/// Return the directory part of `path`.
///
/// Everything before the last `/` or `\` is returned, without the delimiter.
/// A path without any delimiter is returned unchanged: a bare file name
/// carries no directory information worth stripping.
///
/// ```
/// use modlocate_core::paths::directory_part;
///
/// assert_eq!(directory_part("/opt/app/bin/tool"), "/opt/app/bin");
/// assert_eq!(directory_part(r"C:\app\tool.exe"), r"C:\app");
/// assert_eq!(directory_part("tool"), "tool");
/// ```
pub fn directory_part(path: &str) -> &str {
    path.rfind(is_delimiter).map_or(path, |pos| &path[..pos])
}

/// Replace every backslash with a forward slash.
///
/// Borrows when there is nothing to replace.
pub fn unify_delimiters(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Strip surrounding spaces, then every trailing path delimiter.
///
/// `" /a/b// "` becomes `"/a/b"`. Only ASCII spaces are stripped; a tab is
/// treated as part of the path.
pub fn trim_path(path: &str) -> &str {
    path.trim_matches(' ').trim_end_matches(is_native_delimiter)
}

/// Split `value` on `delimiter`, dropping empty entries.
pub fn split(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join `values` with `separator`.
///
/// An empty slice yields an empty string.
pub fn join<S: AsRef<str>>(values: &[S], separator: &str) -> String {
    let mut result = String::new();

    for value in values {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(value.as_ref());
    }

    result
}

/// Split a search-path list on the platform's list delimiter.
///
/// Order is preserved and empty segments are dropped.
pub fn split_path_list(value: &str) -> Vec<String> {
    split(value, PATH_LIST_DELIMITER)
}
