//! Integration tests for the `jot` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the fmt, check,
//! and get subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Fmt subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_stdin_to_stdout_pretty() {
    Command::cargo_bin("jot")
        .unwrap()
        .arg("fmt")
        .write_stdin(r#"{"b":1,"a":2}"#)
        .assert()
        .success()
        .stdout(predicate::eq("{\n    \"a\": 2,\n    \"b\": 1\n}\n"));
}

#[test]
fn fmt_compact_strips_whitespace() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "--compact"])
        .write_stdin("{ \"a\" : [ 1 , 2 ] }\n")
        .assert()
        .success()
        .stdout(predicate::eq("{\"a\":[1,2]}\n"));
}

#[test]
fn fmt_custom_indent() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "--indent", "2"])
        .write_stdin("[1]")
        .assert()
        .success()
        .stdout(predicate::eq("[\n  1\n]\n"));
}

#[test]
fn fmt_file_to_file() {
    let output_path = "/tmp/jot-test-fmt-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "--compact", "-i", sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.starts_with(r#"{"active":true"#));
    assert!(content.contains(r#""scores":[95,87,92]"#));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn fmt_sorts_object_keys() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "--compact"])
        .write_stdin(r#"{"zoo":1,"alpha":2,"mid":3}"#)
        .assert()
        .success()
        .stdout(predicate::eq("{\"alpha\":2,\"mid\":3,\"zoo\":1}\n"));
}

#[test]
fn fmt_invalid_json_fails() {
    Command::cargo_bin("jot")
        .unwrap()
        .arg("fmt")
        .write_stdin("{broken")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON input"));
}

#[test]
fn fmt_missing_input_file_fails() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "-i", "/nonexistent/path.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_valid_document() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["check", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("OK\n"));
}

#[test]
fn check_reports_parse_error() {
    Command::cargo_bin("jot")
        .unwrap()
        .arg("check")
        .write_stdin("[1,2,]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn check_empty_input_fails() {
    Command::cargo_bin("jot")
        .unwrap()
        .arg("check")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no JSON value"));
}

#[test]
fn check_respects_max_depth() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["check", "--max-depth", "2"])
        .write_stdin("[[[1]]]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("depth limit exceeded"));

    Command::cargo_bin("jot")
        .unwrap()
        .args(["check", "--max-depth", "3"])
        .write_stdin("[[[1]]]")
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_object_key() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "age", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("36\n"));
}

#[test]
fn get_nested_path_with_array_index() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "scores.1", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("87\n"));
}

#[test]
fn get_string_is_quoted_by_default() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "address.city", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("\"London\"\n"));
}

#[test]
fn get_raw_strips_quotes() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "address.city", "--raw", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("London\n"));
}

#[test]
fn get_subtree_prints_compact() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "address", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::eq("{\"city\":\"London\",\"zip\":\"W1\"}\n"));
}

#[test]
fn get_missing_key_fails() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "nope", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot resolve"));
}

#[test]
fn get_bad_array_index_fails() {
    Command::cargo_bin("jot")
        .unwrap()
        .args(["get", "scores.x", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an array index"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipelines
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_then_check_round_trip() {
    let pretty = Command::cargo_bin("jot")
        .unwrap()
        .args(["fmt", "-i", sample_json_path()])
        .output()
        .expect("fmt should succeed");
    assert!(pretty.status.success());

    Command::cargo_bin("jot")
        .unwrap()
        .arg("check")
        .write_stdin(pretty.stdout)
        .assert()
        .success()
        .stdout(predicate::eq("OK\n"));
}
