use std::path::PathBuf;

use thiserror::Error;

/// The errors that can happen while building or running a source file.
#[derive(Debug, Error)]
pub enum LangError {
    /// No known language handles this file extension.
    #[error(
        "Unsupported file extension {:?} of {}, supported extensions are: {}",
        .extension,
        .path.display(),
        .supported
    )]
    UnsupportedExtension {
        /// The path of the source file.
        path: PathBuf,
        /// The extension of the file, possibly empty.
        extension: String,
        /// The list of the supported extensions.
        supported: String,
    },
    /// A command template cannot be split into words.
    #[error("Invalid command template for {language}: {template:?}")]
    InvalidTemplate {
        /// The name of the language owning the template.
        language: String,
        /// The faulty template.
        template: String,
        /// The parsing error.
        #[source]
        source: shell_words::ParseError,
    },
    /// A command template expands to nothing.
    #[error("Empty command template for {language}")]
    EmptyTemplate {
        /// The name of the language owning the template.
        language: String,
    },
    /// The compiler or interpreter is not installed.
    #[error("Cannot find {program:?}, is it installed?")]
    MissingExecutable {
        /// The program that was searched.
        program: String,
        /// The lookup error.
        #[source]
        source: which::Error,
    },
    /// The build command exited with a failure.
    #[error("Compilation of {} failed ({})\n{}", .path.display(), .status, .stderr)]
    CompilationFailed {
        /// The source file that failed to compile.
        path: PathBuf,
        /// The exit status of the compiler.
        status: String,
        /// The standard error of the compiler.
        stderr: String,
    },
    /// The process cannot be spawned or waited for.
    #[error("Failed to execute {program:?}")]
    Spawn {
        /// The program that was spawned.
        program: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
