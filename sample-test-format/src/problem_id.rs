use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::SampleError;

/// The canonical identifier of a task of a contest, like `abc130_a`.
///
/// It is made of the slug of the contest and of a single alphabetic task letter, joined by an
/// underscore. A `ProblemId` can only be built from a valid string, so it never needs to be
/// checked again.
///
/// ```
/// use sample_test_format::ProblemId;
///
/// let id: ProblemId = "abc130_f".parse().unwrap();
/// assert_eq!(id.contest(), "abc130");
/// assert_eq!(id.task_letter(), 'f');
/// assert!("abc130_ab".parse::<ProblemId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProblemId(String);

/// Check if the given string is a proper problem identifier.
///
/// A string is valid if it contains at least an underscore and what follows the last underscore
/// is exactly one alphabetic character.
///
/// ```
/// use sample_test_format::is_valid_problem_id;
///
/// assert!(is_valid_problem_id("abc130_f"));
/// assert!(is_valid_problem_id("dp_k"));
/// assert!(!is_valid_problem_id("abcde"));
/// assert!(!is_valid_problem_id("abc130_1"));
/// ```
pub fn is_valid_problem_id(id: &str) -> bool {
    match id.rsplit_once('_') {
        Some((_, index)) => {
            let mut chars = index.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        }
        None => false,
    }
}

impl ProblemId {
    /// Deduce the problem identifier from the path of a source file.
    ///
    /// The file name (without extension, lowercase) is split at every run of spaces, hyphens and
    /// underscores and the first two pieces are joined with an underscore. When this is not a valid
    /// identifier and the first piece is a single letter, the letter is taken as the task of the
    /// contest named like the parent directory.
    ///
    /// Returns `None` when no valid identifier can be deduced.
    ///
    /// ```
    /// use sample_test_format::ProblemId;
    ///
    /// let id = ProblemId::deduce("abc130_a Rounding.py").unwrap();
    /// assert_eq!(id.as_str(), "abc130_a");
    /// let id = ProblemId::deduce("ABC130/A-Rounding.py").unwrap();
    /// assert_eq!(id.as_str(), "abc130_a");
    /// assert!(ProblemId::deduce("ABC130a.cc").is_none());
    /// ```
    pub fn deduce<P: AsRef<Path>>(path: P) -> Option<ProblemId> {
        lazy_static! {
            static ref SEPARATORS: Regex = Regex::new("[ _-]+").expect("Invalid regex");
        }
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let stem = path.file_stem()?.to_string_lossy().to_lowercase();
        debug!("filename stem = {:?}", stem);

        let groups: Vec<&str> = SEPARATORS.split(&stem).collect();
        let candidate = groups.iter().take(2).copied().collect::<Vec<_>>().join("_");
        if is_valid_problem_id(&candidate) {
            return Some(ProblemId(candidate));
        }

        // the file name alone cannot resolve the id, use the parent directory's name as well
        let prefix = groups.first()?;
        let mut chars = prefix.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_alphabetic() => {}
            _ => return None,
        }
        let parent = path.parent()?.file_name()?.to_string_lossy().to_lowercase();
        let candidate = format!("{}_{}", parent, prefix);
        debug!("trying with the parent directory: {:?}", candidate);
        if is_valid_problem_id(&candidate) {
            Some(ProblemId(candidate))
        } else {
            None
        }
    }

    /// The slug of the contest, everything before the last underscore.
    pub fn contest(&self) -> &str {
        self.0
            .rsplit_once('_')
            .map(|(contest, _)| contest)
            .unwrap_or_default()
    }

    /// The letter of the task inside the contest.
    pub fn task_letter(&self) -> char {
        self.0.chars().last().unwrap_or_default()
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProblemId {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_problem_id(s) {
            Ok(ProblemId(s.to_string()))
        } else {
            Err(SampleError::InvalidIdentifier(s.to_string()))
        }
    }
}

impl TryFrom<String> for ProblemId {
    type Error = SampleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_problem_id(&value) {
            Ok(ProblemId(value))
        } else {
            Err(SampleError::InvalidIdentifier(value))
        }
    }
}

impl From<ProblemId> for String {
    fn from(id: ProblemId) -> Self {
        id.0
    }
}

impl Display for ProblemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProblemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
