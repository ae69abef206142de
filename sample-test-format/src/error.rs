use std::path::PathBuf;

use thiserror::Error;

/// The errors of the sample extraction pipeline.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The string is not a valid problem identifier.
    #[error("{0:?} is not a valid problem id (expected something like abc130_a)")]
    InvalidIdentifier(String),
    /// No problem identifier can be deduced from the path of the source file.
    #[error("Failed to deduce the problem id from {}, use --problem-id", .0.display())]
    IdentifierNotDeducible(PathBuf),
    /// The page cannot be fetched.
    #[error("Failed to fetch {url}")]
    FetchError {
        /// The url that was requested.
        url: String,
        /// The underlying error.
        #[source]
        source: anyhow::Error,
    },
    /// The fetched samples are not the ones of the requested problem.
    #[error("Requested the samples of {requested} but got the ones of {fetched}")]
    IdentifierMismatch {
        /// The requested problem.
        requested: String,
        /// The problem of the fetched samples.
        fetched: String,
    },
}
