//! Problems and samples of AtCoder.
//!
//! This crate knows how to name a problem ([`ProblemId`](struct.ProblemId.html)), where its page
//! is and how to extract the sample cases from it ([`AtCoder`](struct.AtCoder.html)), and how to
//! judge the output of a solution against a sample ([`check`](fn.check.html)).
//!
//! The network and the HTML parsing are behind two traits, [`PageFetcher`](trait.PageFetcher.html)
//! and [`SampleParser`](trait.SampleParser.html), so the extraction can be tested offline.
//!
//! This crate also provides the ui for reporting the results of the samples.
//!
//! # Example
//!
//! ```
//! use sample_test_format::{AtCoder, HeadingSiblingParser, ProblemId};
//!
//! let id = ProblemId::deduce("/home/user/abc130/a.cc").unwrap();
//! assert_eq!(id.as_str(), "abc130_a");
//!
//! let html = "<h3>Sample Input 1</h3><pre>3 5\n</pre><h3>Sample Output 1</h3><pre>0\n</pre>";
//! let url = AtCoder::default().problem_url(&id);
//! let parser = HeadingSiblingParser::default();
//! let samples = sample_test_format::parse_samples(id, url, html, &parser);
//! assert_eq!(samples.sample_io_pairs.len(), 1);
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub use atcoder::{parse_samples, AtCoder, DEFAULT_BASE_URL};
pub use checker::{check, outputs_match, Verdict};
pub use credentials::{
    CredentialStore, Credentials, Keyring, SecretStore, PASSWORD_VAR, SERVICE_NAME, USERNAME_VAR,
};
pub use error::SampleError;
pub use fetch::{select_fetcher, AnonymousFetcher, PageFetcher, SessionFetcher};
pub use parser::{HeadingSiblingParser, SampleParser};
pub use problem_id::{is_valid_problem_id, ProblemId};
pub use sample_set::{SampleCase, SampleSet};

mod atcoder;
mod checker;
mod credentials;
mod error;
mod fetch;
mod parser;
mod problem_id;
mod sample_set;
pub mod ui;
