//! Integration tests against the real process.
//!
//! These run the native probe on the host, so they only assert properties
//! that hold for any test binary: paths exist, are absolute, and are stable.

use std::ffi::c_void;
use std::fs;
use std::path::Path;

use modlocate_core::paths::{directory_part, unify_delimiters};
use modlocate_core::{
    Locator, ProcessPaths, bundle_path, executable_path, find_module, library_path, locate_path,
    module_path,
};

fn own_symbol() -> *const c_void {
    let symbol = own_symbol as fn() -> *const c_void;
    symbol as *const c_void
}

#[test]
fn executable_path_is_stable_and_exists() {
    let first = executable_path();
    let second = executable_path();

    assert!(!first.is_empty());
    assert_eq!(first, second, "executable path should not change within a process");
    assert!(Path::new(&first).is_file());
}

#[test]
fn module_path_is_directory_of_executable() {
    let exe = executable_path();
    assert_eq!(module_path(), directory_part(&exe));
    assert!(Path::new(&module_path()).is_dir());
}

#[test]
fn library_path_of_test_code_is_the_test_binary() {
    let library = library_path(own_symbol());
    assert!(!library.is_empty());
    assert!(Path::new(&library).exists());
}

#[test]
fn library_path_of_null_is_empty() {
    assert_eq!(library_path(std::ptr::null()), "");
}

#[cfg(not(target_os = "macos"))]
#[test]
fn bundle_path_is_empty_outside_macos() {
    assert_eq!(bundle_path(), "");
}

#[cfg(target_os = "macos")]
#[test]
fn bundle_path_is_empty_for_plain_binary() {
    // cargo test binaries never live inside an .app bundle
    assert_eq!(bundle_path(), "");
}

#[test]
fn locate_finds_file_next_to_test_binary() {
    let dir = module_path();
    let marker = format!("modlocate-marker-{}.txt", std::process::id());
    let marker_path = Path::new(&dir).join(&marker);
    fs::write(&marker_path, "marker").expect("write marker");

    let found = locate_path(&marker, "", std::ptr::null());
    let _ = fs::remove_file(&marker_path);

    assert_eq!(found, unify_delimiters(&dir));
}

#[test]
fn locate_unknown_path_is_empty() {
    assert_eq!(
        locate_path("modlocate/definitely/not/here.bin", "share/modlocate", own_symbol()),
        ""
    );
}

#[test]
fn find_missing_module_is_empty() {
    let descriptor = find_module("modlocate-integration-missing-module");
    assert!(descriptor.is_empty());
}

#[test]
fn process_paths_match_free_functions() {
    let paths = ProcessPaths::resolve("modlocate");
    assert_eq!(paths.executable_path, executable_path());
    assert_eq!(paths.module_path, module_path());
    assert_eq!(paths.bundle_path, bundle_path());
    assert_eq!(paths, Locator::native().process_paths("modlocate"));
}
