use sample_test_lang::{ExecutionResult, ExecutionStatus};

/// The outcome of a solution on a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The output matches the sample output.
    Ok,
    /// The output differs from the sample output.
    WrongAnswer,
    /// The solution did not exit successfully.
    RuntimeError(ExecutionStatus),
}

impl Verdict {
    /// Whether the sample is passed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// Split the text into lines ignoring the white spaces at the start and at the end of the whole
/// text, and the ones at the end of each line.
pub fn normalize_output(text: &str) -> Vec<&str> {
    text.trim().lines().map(str::trim_end).collect()
}

/// Check whether two outputs are the same, white spaces aside (see `normalize_output`).
///
/// ```
/// use sample_test_format::outputs_match;
///
/// assert!(outputs_match("10\n", "10 "));
/// assert!(outputs_match("1\n2\n", "1  \r\n2\n\n"));
/// assert!(!outputs_match("1 2", "1  2"));
/// ```
pub fn outputs_match(expected: &str, actual: &str) -> bool {
    normalize_output(expected) == normalize_output(actual)
}

/// Judge the result of a solution against the expected output of a sample.
pub fn check(expected: &str, result: &ExecutionResult) -> Verdict {
    match &result.status {
        ExecutionStatus::Success => {
            if outputs_match(expected, &result.stdout) {
                Verdict::Ok
            } else {
                Verdict::WrongAnswer
            }
        }
        status => Verdict::RuntimeError(status.clone()),
    }
}
