#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use sample_test_format::{SampleCase, SampleSet};

pub fn setup() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_nanos()
        .is_test(true)
        .try_init();
}

/// The samples of abc130_a, where the answer is 0 if X < A and 10 otherwise.
pub fn abc130_a() -> SampleSet {
    SampleSet {
        id: "abc130_a".parse().unwrap(),
        url: "https://atcoder.jp/contests/abc130/tasks/abc130_a".to_string(),
        sample_io_pairs: vec![
            SampleCase::new(["3 5"], ["0"]),
            SampleCase::new(["7 5"], ["10"]),
            SampleCase::new(["6 6"], ["10"]),
        ],
    }
}

/// Write a source file inside `dir`.
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Whether the program is available in `$PATH`, printing a message when it is not.
pub fn has_program(program: &str) -> bool {
    if which::which(program).is_ok() {
        true
    } else {
        eprintln!("{} not found, skipping the test", program);
        false
    }
}

/// Run the sample-test binary, never reaching the real website.
pub fn sample_test<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_sample-test"))
        .args(args)
        .env("SAMPLE_TEST_BASE_URL", "http://127.0.0.1:9")
        .env_remove("ATCODER_USERNAME")
        .env_remove("ATCODER_PASSWORD")
        .output()
        .unwrap()
}
