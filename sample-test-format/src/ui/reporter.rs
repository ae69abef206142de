use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use sample_test_lang::{ExecutionResult, ExecutionStatus};

use crate::checker::Verdict;
use crate::ui::{BLUE, BOLD, GREEN, ORANGE, RED, YELLOW};
use crate::{cwrite, cwriteln, ProblemId, SampleCase};

/// Prints the results of the samples to a stream.
///
/// The colors come from the stream: a `termcolor::Buffer::no_color()` or a stream built with
/// `ColorChoice::Never` prints plain text.
pub struct Reporter<W: WriteColor> {
    /// Where to print to.
    stream: W,
    /// Number of passed samples.
    passed: usize,
    /// Number of reported samples.
    total: usize,
}

impl Reporter<StandardStream> {
    /// Make a `Reporter` that prints to stdout.
    pub fn stdout(color: ColorChoice) -> Reporter<StandardStream> {
        Reporter::new(StandardStream::stdout(color))
    }
}

impl<W: WriteColor> Reporter<W> {
    /// Make a new `Reporter` printing to `stream`.
    pub fn new(stream: W) -> Reporter<W> {
        Reporter {
            stream,
            passed: 0,
            total: 0,
        }
    }

    /// Print the problem and the file being tested.
    pub fn header(&mut self, id: &ProblemId, filename: &str) {
        cwrite!(self, BOLD, "\nAtCoder ");
        cwrite!(self, BOLD, "{}", id);
        cwrite!(self, BOLD, ": ");
        cwriteln!(self, BOLD, "{}", filename);
    }

    /// Print the outcome of a sample. `index` starts from zero.
    pub fn case(
        &mut self,
        index: usize,
        case: &SampleCase,
        result: &ExecutionResult,
        verdict: &Verdict,
    ) {
        self.total += 1;
        cwrite!(self, BLUE, "Case {}", index + 1);
        cwrite!(self, BOLD, ": ");
        match verdict {
            Verdict::Ok => {
                self.passed += 1;
                cwrite!(self, GREEN, "ok");
                cwriteln!(self, BOLD, " ({:.3}s)", result.elapsed.as_secs_f64());
                return;
            }
            Verdict::WrongAnswer => {
                cwriteln!(self, RED, "============ Mismatch ============");
            }
            Verdict::RuntimeError(status) => {
                cwrite!(self, RED, "============ Runtime error ============ ");
                cwriteln!(self, YELLOW, "{}", describe_status(status));
            }
        }
        self.block("Sample Input : ", &case.input_text(), None);
        self.block("Sample Output: ", &case.output_text(), None);
        self.block("Your Answer  : ", &result.stdout, Some(&*ORANGE));
        if !result.stderr.trim().is_empty() {
            self.block("Stderr       : ", &result.stderr, Some(&*YELLOW));
        }
    }

    /// Print the number of passed samples.
    pub fn summary(&mut self) {
        let color: &ColorSpec = if self.all_passed() { &GREEN } else { &RED };
        cwriteln!(self, color, "{}/{} samples passed", self.passed, self.total);
    }

    /// Whether all the reported samples passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Consume the reporter returning its stream.
    pub fn into_inner(self) -> W {
        self.stream
    }

    /// Print a labelled block of text, the following lines aligned with the first.
    fn block(&mut self, label: &str, text: &str, color: Option<&ColorSpec>) {
        let plain = ColorSpec::new();
        let color = color.unwrap_or(&plain);
        cwrite!(self, BOLD, "{}", label);
        let text = text.trim();
        let mut lines = text.lines();
        cwriteln!(self, color, "{}", lines.next().unwrap_or_default());
        for line in lines {
            cwriteln!(self, color, "{:width$}{}", "", line, width = label.len());
        }
    }
}

/// A human readable description of how a program exited.
fn describe_status(status: &ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Success => "Success".to_string(),
        ExecutionStatus::ReturnCode(code) => format!("Exited with {}", code),
        ExecutionStatus::Signal(sig) => format!("Killed by signal {}", sig),
    }
}
