use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tempfile::TempDir;
use termcolor::Buffer;

use atcoder_sample_test::test_samples;
use sample_test_format::ui::Reporter;
use sample_test_format::Verdict;
use sample_test_lang::{ExecutionStatus, LangError, Program, SourceFile};

mod common;
use common::*;

const CORRECT: &str = "x, a = map(int, input().split())\nprint(0 if x < a else 10)\n";
const WRONG: &str = "x, a = map(int, input().split())\nprint(0 if x <= a else 10)\n";

fn output(reporter: Reporter<Buffer>) -> String {
    String::from_utf8(reporter.into_inner().into_inner()).unwrap()
}

#[test]
fn test_correct_python_solution() {
    setup();
    if !has_program("python3") {
        return;
    }
    let tmpdir = TempDir::new().unwrap();
    let path = write_source(tmpdir.path(), "abc130/a.py", CORRECT);
    let program = SourceFile::new(&path).unwrap().prepare().unwrap();
    let mut reporter = Reporter::new(Buffer::no_color());
    let verdicts = test_samples(&program, &abc130_a(), &mut reporter).unwrap();
    assert_eq!(verdicts, vec![Verdict::Ok, Verdict::Ok, Verdict::Ok]);
    let out = output(reporter);
    assert_that!(out.as_str()).contains("Case 3: ok");
    assert_that!(out.as_str()).contains("3/3 samples passed");
}

#[test]
fn test_wrong_python_solution() {
    setup();
    if !has_program("python3") {
        return;
    }
    let tmpdir = TempDir::new().unwrap();
    let path = write_source(tmpdir.path(), "abc130_a.py", WRONG);
    let program = SourceFile::new(&path).unwrap().prepare().unwrap();
    let mut reporter = Reporter::new(Buffer::no_color());
    let verdicts = test_samples(&program, &abc130_a(), &mut reporter).unwrap();
    assert_eq!(verdicts, vec![Verdict::Ok, Verdict::Ok, Verdict::WrongAnswer]);
    let out = output(reporter);
    assert_that!(out.as_str()).contains("Case 3: ============ Mismatch ============");
    assert_that!(out.as_str()).contains("Sample Input : 6 6");
    assert_that!(out.as_str()).contains("Sample Output: 10");
    assert_that!(out.as_str()).contains("Your Answer  : 0");
    assert_that!(out.as_str()).contains("2/3 samples passed");
}

#[test]
fn test_crashing_program() {
    setup();
    if !has_program("sh") {
        return;
    }
    let tmpdir = TempDir::new().unwrap();
    let program = Program::new(
        vec!["sh".into(), "-c".into(), "echo partial; exit 3".into()],
        tmpdir.path(),
    );
    let mut reporter = Reporter::new(Buffer::no_color());
    let verdicts = test_samples(&program, &abc130_a(), &mut reporter).unwrap();
    assert_eq!(
        verdicts[0],
        Verdict::RuntimeError(ExecutionStatus::ReturnCode(3))
    );
    let out = output(reporter);
    assert_that!(out.as_str()).contains("Your Answer  : partial");
    assert_that!(out.as_str()).contains("0/3 samples passed");
}

#[test]
fn test_cpp_compilation_error() {
    setup();
    if !has_program("g++") {
        return;
    }
    let tmpdir = TempDir::new().unwrap();
    let path = write_source(tmpdir.path(), "abc130_a.cpp", "int main() { return x; }\n");
    let err = SourceFile::new(&path).unwrap().prepare().unwrap_err();
    match err {
        LangError::CompilationFailed { stderr, .. } => {
            assert_that!(stderr.as_str()).contains("x");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_cpp_solution() {
    setup();
    if !has_program("g++") {
        return;
    }
    let tmpdir = TempDir::new().unwrap();
    let source = "#include <iostream>\nint main() { int x, a; std::cin >> x >> a; \
                  std::cout << (x < a ? 0 : 10) << std::endl; }\n";
    let path = write_source(tmpdir.path(), "abc130_a.cc", source);
    let program = SourceFile::new(&path).unwrap().prepare().unwrap();
    assert_that!(tmpdir.path().join("abc130_a.exe").exists()).is_true();
    let mut reporter = Reporter::new(Buffer::no_color());
    let verdicts = test_samples(&program, &abc130_a(), &mut reporter).unwrap();
    assert!(verdicts.iter().all(Verdict::is_ok));
}
