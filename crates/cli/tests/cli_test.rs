//! End-to-end tests for the starquery binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BUILD_FILE: &str = r#"
load("@rules_rust//rust:defs.bzl", "rust_library", "rust_test")

rust_library(
    name = "mylib",
    srcs = ["src/lib.rs"],
)

rust_test(
    name = "mylib_test",
    crate = ":mylib",
    tags = 1,
)
"#;

fn write_build_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_reports_extracted_calls() {
    let temp_dir = TempDir::new().unwrap();
    let build_file = write_build_file(&temp_dir, "BUILD.bazel", BUILD_FILE);

    Command::cargo_bin("starquery")
        .unwrap()
        .arg(&build_file)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Function rust_library, line 4, 2 arguments: [name = mylib, srcs = [src/lib.rs]]",
        ))
        .stdout(predicate::str::contains("[UnsupportedValueType]"))
        .stdout(predicate::str::contains("Found 1 function calls."))
        .stderr(predicate::str::contains("Skipping function call on line 9"));
}

#[test]
fn test_json_output_with_name_filter() {
    let temp_dir = TempDir::new().unwrap();
    let build_file = write_build_file(
        &temp_dir,
        "BUILD",
        "a(name = \"1\")\nb(name = \"2\")\na(deps = [\"x\", \"y\"])\n",
    );

    let output = Command::cargo_bin("starquery")
        .unwrap()
        .args(["--format", "json", "--name", "a"])
        .arg(&build_file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let calls = json[0]["calls"].as_array().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0]["args"][0]["value"], "1");
    assert_eq!(calls[1]["args"][0]["value"], serde_json::json!(["x", "y"]));
    assert_eq!(json[0]["skipped"], serde_json::json!([]));
}

#[test]
fn test_multiple_files_keep_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_build_file(&temp_dir, "first.bzl", "first(name = \"a\")\n");
    let second = write_build_file(&temp_dir, "second.bzl", "second(name = \"b\")\n");

    Command::cargo_bin("starquery")
        .unwrap()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)first\\.bzl.*Function first.*second\\.bzl.*Function second").unwrap());
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("starquery")
        .unwrap()
        .arg("/nonexistent/BUILD")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read Starlark file"));
}

#[test]
fn test_syntax_error_fails() {
    let temp_dir = TempDir::new().unwrap();
    let build_file = write_build_file(&temp_dir, "BUILD", "foo(name = \"bar\"\n");

    Command::cargo_bin("starquery")
        .unwrap()
        .arg(&build_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse Starlark file"));
}
