//! Crate for managing programming languages and source files.
//!
//! A language is pure data: a [`Language`](struct.Language.html) describes how to build a source
//! file and how to run the result with two command templates. The table of supported languages
//! lives in the `languages` module, adding a new language means adding a new entry there.
//!
//! The entry point of this crate is [`LanguageManager`](struct.LanguageManager.html), a struct that
//! is able to detect the language of a source file based on its extension.
//!
//! To actually use the language you can use [`SourceFile`](struct.SourceFile.html), it exposes the
//! functionalities for compiling and running a source file.
//!
//! # Example
//!
//! ```
//! use sample_test_lang::LanguageManager;
//!
//! let lang = LanguageManager::detect_language("test.cpp").expect("unknown lang");
//! assert!(lang.name.contains("C++"))
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod error;
mod language;
mod languages;
mod source_file;

pub use error::LangError;
pub use language::{Language, Placeholders};
pub use source_file::{ExecutionResult, ExecutionStatus, Program, SourceFile};

use std::path::Path;
use std::sync::Arc;

/// Manager of all the known languages, you should use this to get
/// [`Language`](struct.Language.html) instances.
pub struct LanguageManager {
    /// The list of all the known languages.
    known_languages: Vec<Arc<Language>>,
}

impl LanguageManager {
    /// Make a new `LanguageManager` with all the known languages, applying the overrides found in
    /// the environment variables.
    fn new() -> LanguageManager {
        LanguageManager {
            known_languages: languages::KNOWN_LANGUAGES
                .iter()
                .map(|entry| Arc::new(Language::from_entry(entry, |var| std::env::var(var).ok())))
                .collect(),
        }
    }

    /// Given a path to a file guess the language that the source file probably is.
    ///
    /// ```
    /// use sample_test_lang::LanguageManager;
    ///
    /// let cpp = LanguageManager::detect_language("test.cc").unwrap();
    /// assert!(cpp.name.contains("C++"));
    /// let py = LanguageManager::detect_language("test.py").unwrap();
    /// assert!(py.name.contains("Python"));
    /// let unknown = LanguageManager::detect_language("test.foobar");
    /// assert!(unknown.is_none());
    /// ```
    pub fn detect_language<P: AsRef<Path>>(path: P) -> Option<Arc<Language>> {
        let manager = &LANGUAGE_MANAGER_SINGL;
        let ext = path
            .as_ref()
            .extension()
            .map(|s| s.to_string_lossy())
            .unwrap_or_else(|| "".into())
            .to_lowercase();
        manager
            .known_languages
            .iter()
            .find(|lang| lang.extensions.iter().any(|lang_ext| *lang_ext == ext))
            .cloned()
    }

    /// The comma separated list of all the supported extensions, for error messages.
    pub fn supported_extensions() -> String {
        let manager = &LANGUAGE_MANAGER_SINGL;
        manager
            .known_languages
            .iter()
            .flat_map(|lang| lang.extensions.iter())
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

lazy_static! {
    /// The singleton instance of the `LanguageManager`.
    static ref LANGUAGE_MANAGER_SINGL: LanguageManager = LanguageManager::new();
}
