use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::{LangError, Language, LanguageManager};

/// A source file that will be able to be executed (with an optional compilation step).
///
/// After creating a `SourceFile` using `new` you have to call `prepare` once, it will build the
/// file if its language needs it and return the [`Program`](struct.Program.html) to run for each
/// input.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the source file.
    pub path: PathBuf,
    /// Language of the source file.
    language: Arc<Language>,
}

/// A program ready to be started: the source file has already been built, if needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The command line to run, the first element is the executable.
    command: Vec<String>,
    /// The working directory of the program.
    cwd: PathBuf,
}

/// The status of a completed execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// The program exited with status zero.
    Success,
    /// The program exited with a non-zero status.
    ReturnCode(i32),
    /// The program was killed by a signal.
    Signal(i32),
}

/// The outcome of a single execution of a [`Program`](struct.Program.html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// How the program exited.
    pub status: ExecutionStatus,
    /// The captured standard output, lossily decoded.
    pub stdout: String,
    /// The captured standard error, lossily decoded.
    pub stderr: String,
    /// The wall time of the execution.
    pub elapsed: Duration,
}

impl SourceFile {
    /// Make a new `SourceFile` from the provided file. Will fail with
    /// [`LangError::UnsupportedExtension`](enum.LangError.html) if the language is unknown.
    ///
    /// The language of the source file will be detected using the
    /// [`LanguageManager`](struct.LanguageManager.html), only those languages are supported.
    ///
    /// ```
    /// use sample_test_lang::SourceFile;
    ///
    /// let source = SourceFile::new("abc130/a.cc").unwrap();
    /// assert!(source.language().need_compilation());
    /// assert!(SourceFile::new("abc130/a.txt").is_err());
    /// ```
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<SourceFile, LangError> {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        match LanguageManager::detect_language(&path) {
            Some(language) => Ok(SourceFile { path, language }),
            None => Err(LangError::UnsupportedExtension {
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_default(),
                path,
                supported: LanguageManager::supported_extensions(),
            }),
        }
    }

    /// The language of this source file.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Build the source file if the language needs it and return the program to run.
    ///
    /// The build command is executed inside the directory of the source file, the compiled files
    /// are written next to the source file.
    pub fn prepare(&self) -> Result<Program, LangError> {
        let cwd = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(build) = self.language.build_command(&self.path)? {
            info!("Compiling {} with {}", self.path.display(), self.language.name);
            debug!("Build command: {:?}", build);
            let output = command_for(&build, &cwd)?
                .stdin(Stdio::null())
                .output()
                .map_err(|source| LangError::Spawn {
                    program: build[0].clone(),
                    source,
                })?;
            if !output.status.success() {
                return Err(LangError::CompilationFailed {
                    path: self.path.clone(),
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
        }
        let command = self.language.run_command(&self.path)?;
        debug!("Run command: {:?}", command);
        Ok(Program { command, cwd })
    }
}

impl Program {
    /// Make a program that runs the provided command line inside `cwd`.
    pub fn new<P: Into<PathBuf>>(command: Vec<String>, cwd: P) -> Program {
        Program {
            command,
            cwd: cwd.into(),
        }
    }

    /// The command line of the program.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Run the program once, feeding `input` to its standard input and capturing its standard
    /// output and standard error. This waits for the program to exit, with no time limit.
    pub fn run(&self, input: &str) -> Result<ExecutionResult, LangError> {
        let program = self.command.first().cloned().unwrap_or_default();
        let spawn_error = |source| LangError::Spawn {
            program: program.clone(),
            source,
        };
        let start = Instant::now();
        let mut child = command_for(&self.command, &self.cwd)?
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;
        // stdin is fed from another thread while the outputs are drained, the program may block
        // writing its output before reading all of its input
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.as_bytes().to_vec();
            thread::spawn(move || match stdin.write_all(&input) {
                // the program may exit without reading all its input
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                res => res,
            })
        });
        let output = child.wait_with_output().map_err(spawn_error)?;
        if let Some(writer) = writer {
            match writer.join() {
                Ok(res) => res.map_err(spawn_error)?,
                Err(_) => {
                    return Err(spawn_error(std::io::Error::other(
                        "the thread writing stdin panicked",
                    )))
                }
            }
        }
        let elapsed = start.elapsed();
        let status = match output.status.code() {
            Some(0) => ExecutionStatus::Success,
            Some(code) => ExecutionStatus::ReturnCode(code),
            None => ExecutionStatus::Signal(signal_of(&output.status)),
        };
        trace!("{:?} exited with {:?} in {:?}", self.command, status, elapsed);
        Ok(ExecutionResult {
            status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            elapsed,
        })
    }
}

/// Build a `Command` for the command line, resolving the executable in `$PATH`.
fn command_for(args: &[String], cwd: &Path) -> Result<Command, LangError> {
    let program = args.first().ok_or_else(|| LangError::Spawn {
        program: String::new(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
    })?;
    let resolved = which::which(program).map_err(|source| {
        LangError::MissingExecutable {
            program: program.clone(),
            source,
        }
    })?;
    let mut command = Command::new(resolved);
    command.args(&args[1..]);
    if !cwd.as_os_str().is_empty() {
        command.current_dir(cwd);
    }
    Ok(command)
}

#[cfg(unix)]
fn signal_of(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn signal_of(_status: &std::process::ExitStatus) -> i32 {
    0
}
