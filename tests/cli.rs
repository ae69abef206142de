use speculoos::prelude::*;
use tempfile::TempDir;

mod common;
use common::*;

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_source_file() {
    let output = sample_test(["run", "/nonexistent/abc130_a.py", "--no-login"]);
    assert_eq!(output.status.code(), Some(1));
    assert_that!(stderr(&output).as_str()).contains("Source file not found");
}

#[test]
fn test_unsupported_extension() {
    let tmpdir = TempDir::new().unwrap();
    let path = write_source(tmpdir.path(), "abc130_a.java", "class Main {}");
    let output = sample_test(["run", path.to_str().unwrap(), "--no-login"]);
    assert_eq!(output.status.code(), Some(1));
    assert_that!(stderr(&output).as_str()).contains(".java");
}

#[test]
fn test_problem_id_not_deducible() {
    let tmpdir = TempDir::new().unwrap();
    let path = write_source(tmpdir.path(), "abc130/aRounding.py", "print(0)");
    let output = sample_test(["run", path.to_str().unwrap(), "--no-login"]);
    assert_eq!(output.status.code(), Some(1));
    assert_that!(stderr(&output).as_str()).contains("--problem-id");
}

#[test]
fn test_invalid_problem_id() {
    let output = sample_test(["fetch", "abc130_ab", "--no-login"]);
    assert_that!(output.status.success()).is_false();
    assert_that!(stderr(&output).as_str()).contains("abc130_ab");
}

#[test]
fn test_fetch_failure_is_fatal() {
    let tmpdir = TempDir::new().unwrap();
    let output = sample_test([
        "fetch",
        "abc130_a",
        "--no-login",
        "--output-dir",
        tmpdir.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_that!(stderr(&output).as_str())
        .contains("Failed to fetch http://127.0.0.1:9/contests/abc130/tasks/abc130_a");
}

#[test]
fn test_gen_autocompletion() {
    let tmpdir = TempDir::new().unwrap();
    let output = sample_test([
        "gen-autocompletion",
        "--target",
        tmpdir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_that!(tmpdir.path().join("_sample-test").exists()).is_true();
}
