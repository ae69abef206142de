use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};

use crate::ProblemId;

/// One sample of a problem: the lines of the input and the lines of the expected output.
///
/// It is serialized as a pair `[[input lines...], [output lines...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Vec<String>, Vec<String>)", into = "(Vec<String>, Vec<String>)")]
pub struct SampleCase {
    /// The lines of the sample input.
    pub input: Vec<String>,
    /// The lines of the sample output.
    pub output: Vec<String>,
}

/// All the samples of a problem, in the order they appear in the problem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSet {
    /// The problem the samples belong to.
    pub id: ProblemId,
    /// The url of the page the samples were taken from.
    pub url: String,
    /// The samples, matched with the solution outputs by position.
    pub sample_io_pairs: Vec<SampleCase>,
}

impl SampleCase {
    /// Make a new `SampleCase` from its input and output lines.
    pub fn new<I, O>(input: I, output: O) -> SampleCase
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        SampleCase {
            input: input.into_iter().map(Into::into).collect(),
            output: output.into_iter().map(Into::into).collect(),
        }
    }

    /// The text to send to the standard input of the solution, a newline after each line.
    pub fn input_text(&self) -> String {
        join_lines(&self.input)
    }

    /// The expected output as a single text, a newline after each line.
    pub fn output_text(&self) -> String {
        join_lines(&self.output)
    }
}

impl From<(Vec<String>, Vec<String>)> for SampleCase {
    fn from((input, output): (Vec<String>, Vec<String>)) -> Self {
        SampleCase { input, output }
    }
}

impl From<SampleCase> for (Vec<String>, Vec<String>) {
    fn from(case: SampleCase) -> Self {
        (case.input, case.output)
    }
}

impl SampleSet {
    /// Serialize the samples to the pretty-printed JSON format:
    /// `{"id": ..., "url": ..., "sample_io_pairs": [[[input...], [output...]], ...]}`.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).context("Failed to serialize the samples")
    }

    /// Parse the samples back from their JSON format.
    pub fn from_json(json: &str) -> Result<SampleSet, Error> {
        serde_json::from_str(json).context("Invalid samples JSON")
    }

    /// Save each sample as two text files inside `dir`: `{id}_{index}_in.txt` with the input and
    /// `{id}_{index}_out.txt` with the output, one line per line of the sample. The index starts
    /// from zero.
    ///
    /// Returns the paths of the written files, in order.
    pub fn dump<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>, Error> {
        let dir = dir.as_ref();
        let mut written = vec![];
        for (index, case) in self.sample_io_pairs.iter().enumerate() {
            let name = format!("{}_{}", self.id, index);
            for (suffix, lines) in [("in", &case.input), ("out", &case.output)] {
                let path = dir.join(format!("{}_{}.txt", name, suffix));
                write_lines(&path, lines)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                written.push(path);
            }
        }
        Ok(written)
    }
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), std::io::Error> {
    let mut file = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()
}

fn join_lines(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
