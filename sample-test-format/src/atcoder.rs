use crate::fetch::PageFetcher;
use crate::parser::SampleParser;
use crate::{ProblemId, SampleCase, SampleError, SampleSet};

/// The address of the AtCoder website.
pub const DEFAULT_BASE_URL: &str = "https://atcoder.jp";

/// The marker of the headings of the sample inputs.
pub const SAMPLE_INPUT_MARKER: &str = "Sample Input";
/// The marker of the headings of the sample outputs.
pub const SAMPLE_OUTPUT_MARKER: &str = "Sample Output";

/// The AtCoder website, rooted at a base url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtCoder {
    /// The base url, without the trailing slash.
    base_url: String,
}

impl Default for AtCoder {
    fn default() -> Self {
        AtCoder::new(DEFAULT_BASE_URL)
    }
}

impl AtCoder {
    /// Make a new `AtCoder` using the website at `base_url`.
    pub fn new<S: AsRef<str>>(base_url: S) -> AtCoder {
        AtCoder {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// The url of the page of a problem.
    ///
    /// ```
    /// use sample_test_format::AtCoder;
    ///
    /// let id = "abc130_f".parse().unwrap();
    /// assert_eq!(
    ///     AtCoder::default().problem_url(&id),
    ///     "https://atcoder.jp/contests/abc130/tasks/abc130_f"
    /// );
    /// ```
    pub fn problem_url(&self, id: &ProblemId) -> String {
        format!("{}/contests/{}/tasks/{}", self.base_url, id.contest(), id)
    }

    /// The url of the login form.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Fetch the page of the problem and extract its samples.
    pub fn extract_samples(
        &self,
        id: &ProblemId,
        fetcher: &dyn PageFetcher,
        parser: &dyn SampleParser,
    ) -> Result<SampleSet, SampleError> {
        let url = self.problem_url(id);
        info!("Fetching the samples of {} from {}", id, url);
        let html = fetcher.fetch(&url)?;
        Ok(parse_samples(id.clone(), url, &html, parser))
    }
}

/// Extract the samples from the page of a problem.
///
/// The i-th sample input is paired with the i-th sample output. When the page has a different
/// number of inputs and outputs the extra ones are dropped, with a warning.
pub fn parse_samples(
    id: ProblemId,
    url: String,
    html: &str,
    parser: &dyn SampleParser,
) -> SampleSet {
    let inputs = parser.extract_blocks(html, SAMPLE_INPUT_MARKER);
    let outputs = parser.extract_blocks(html, SAMPLE_OUTPUT_MARKER);
    if inputs.len() != outputs.len() {
        warn!(
            "{} has {} sample inputs but {} sample outputs, using only the first {}",
            url,
            inputs.len(),
            outputs.len(),
            inputs.len().min(outputs.len())
        );
    }
    if inputs.is_empty() {
        warn!("No samples found in {}", url);
    }
    let sample_io_pairs = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| SampleCase { input, output })
        .collect();
    SampleSet {
        id,
        url,
        sample_io_pairs,
    }
}
