//! End-to-end tests that run the built `modlocate` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn modlocate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modlocate"))
        .args(args)
        .env_remove("CPPLOCATE_PATH")
        .output()
        .expect("run modlocate")
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn exe_prints_own_path() {
    let output = modlocate(&["exe"]);
    assert!(output.status.success());

    let path = stdout_line(&output);
    assert!(Path::new(&path).is_file(), "not a file: {path}");
    assert!(
        Path::new(&path)
            .file_stem()
            .is_some_and(|stem| stem == "modlocate")
    );
}

#[test]
fn module_dir_contains_binary() {
    let output = modlocate(&["module-dir"]);
    assert!(output.status.success());
    assert!(Path::new(&stdout_line(&output)).is_dir());
}

#[test]
fn library_is_reported() {
    let output = modlocate(&["library"]);
    assert!(output.status.success());
    assert!(!stdout_line(&output).is_empty());
}

#[test]
fn paths_lists_keys() {
    let output = modlocate(&["paths"]);
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("executable_path = "));
    assert!(text.contains("module_path = "));
}

#[test]
fn missing_module_exits_with_one() {
    let output = modlocate(&["find", "modlocate-e2e-missing-module"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn find_reads_module_path_option() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("e2e.modinfo"), "name: e2e\n").unwrap();

    let search_path = temp.path().to_string_lossy().into_owned();
    let output = modlocate(&["--module-path", &search_path, "find", "e2e", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "e2e");
}

#[test]
fn locate_missing_path_exits_with_one() {
    let output = modlocate(&["locate", "modlocate/not/here.txt"]);
    assert_eq!(output.status.code(), Some(1));
}
