use std::path::{Path, PathBuf};

use crate::languages::LanguageEntry;
use crate::LangError;

/// A supported programming language.
///
/// A language is described only by data: an optional template for building the source file and a
/// template for running the result. Each template is split into words like a shell would do, then
/// every word has its placeholders expanded (see [`Placeholders`](struct.Placeholders.html)).
///
/// A language without a build template is interpreted, the source file is run directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Full name of the language. This must be unique between all the other languages.
    pub name: String,
    /// Uppercase key of the language, used for building the names of the environment variables
    /// that override the templates.
    pub key: String,
    /// List of valid extensions for this language, lowercase and without the dot. A file is
    /// considered in this language if its extension is inside this list.
    pub extensions: Vec<String>,
    /// The template of the command that builds the source file, if the language is compiled.
    pub build_template: Option<String>,
    /// The template of the command that runs the program.
    pub run_template: String,
}

impl Language {
    /// Make a `Language` from an entry of the table of the known languages.
    ///
    /// `env` is used to look up the overrides: `SAMPLE_TEST_<KEY>_BUILD` replaces the build
    /// template (an empty value disables the build step) and `SAMPLE_TEST_<KEY>_RUN` replaces the
    /// run template.
    pub(crate) fn from_entry<F>(entry: &LanguageEntry, env: F) -> Language
    where
        F: Fn(&str) -> Option<String>,
    {
        let build_var = format!("SAMPLE_TEST_{}_BUILD", entry.key);
        let run_var = format!("SAMPLE_TEST_{}_RUN", entry.key);
        let build_template = match env(&build_var) {
            Some(build) if build.trim().is_empty() => None,
            Some(build) => {
                debug!("Using {} = {:?}", build_var, build);
                Some(build)
            }
            None => entry.build.map(String::from),
        };
        let run_template = match env(&run_var) {
            Some(run) if !run.trim().is_empty() => {
                debug!("Using {} = {:?}", run_var, run);
                run
            }
            _ => entry.run.to_string(),
        };
        Language {
            name: entry.name.to_string(),
            key: entry.key.to_string(),
            extensions: entry.extensions.iter().map(|e| e.to_string()).collect(),
            build_template,
            run_template,
        }
    }

    /// Whether this language needs a build step before running.
    pub fn need_compilation(&self) -> bool {
        self.build_template.is_some()
    }

    /// The command line that builds `source`, `None` for the interpreted languages.
    pub fn build_command(&self, source: &Path) -> Result<Option<Vec<String>>, LangError> {
        match &self.build_template {
            Some(template) => Ok(Some(self.expand(template, source)?)),
            None => Ok(None),
        }
    }

    /// The command line that runs the program built from `source`.
    pub fn run_command(&self, source: &Path) -> Result<Vec<String>, LangError> {
        self.expand(&self.run_template, source)
    }

    /// Split the template into words and expand the placeholders of each word.
    fn expand(&self, template: &str, source: &Path) -> Result<Vec<String>, LangError> {
        let words = shell_words::split(template).map_err(|source| LangError::InvalidTemplate {
            language: self.name.clone(),
            template: template.to_string(),
            source,
        })?;
        if words.is_empty() {
            return Err(LangError::EmptyTemplate {
                language: self.name.clone(),
            });
        }
        let placeholders = Placeholders::new(source);
        Ok(words.iter().map(|word| placeholders.apply(word)).collect())
    }
}

/// The values that replace the placeholders of the command templates, all derived from the path of
/// the source file.
///
/// | Placeholder | Value                                          |
/// |-------------|------------------------------------------------|
/// | `{source}`  | the path of the source file                    |
/// | `{exe}`     | `<stem>.exe`, next to the source file          |
/// | `{jar}`     | `<stem>.jar`, next to the source file          |
/// | `{class}`   | the Kotlin main class, `<Stem>Kt`              |
/// | `{dir}`     | the directory of the source file               |
/// | `{stem}`    | the file name of the source without extension  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    /// Path of the source file.
    pub source: PathBuf,
    /// Path of the compiled executable.
    pub exe: PathBuf,
    /// Path of the compiled jar.
    pub jar: PathBuf,
    /// Name of the main class of a Kotlin program.
    pub class: String,
    /// Directory of the source file.
    pub dir: PathBuf,
    /// File name without extension.
    pub stem: String,
}

impl Placeholders {
    /// Compute the placeholders of the specified source file.
    pub fn new(source: &Path) -> Placeholders {
        let dir = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut chars = stem.chars();
        let class = match chars.next() {
            Some(first) => format!("{}{}Kt", first.to_uppercase(), chars.as_str()),
            None => "Kt".to_string(),
        };
        Placeholders {
            source: source.to_path_buf(),
            exe: dir.join(format!("{}.exe", stem)),
            jar: dir.join(format!("{}.jar", stem)),
            class,
            dir,
            stem,
        }
    }

    /// Replace all the placeholders inside `word`.
    pub fn apply(&self, word: &str) -> String {
        word.replace("{source}", &self.source.to_string_lossy())
            .replace("{exe}", &self.exe.to_string_lossy())
            .replace("{jar}", &self.jar.to_string_lossy())
            .replace("{class}", &self.class)
            .replace("{dir}", &self.dir.to_string_lossy())
            .replace("{stem}", &self.stem)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;
    use crate::languages::KNOWN_LANGUAGES;

    fn entry(key: &str) -> &'static LanguageEntry {
        KNOWN_LANGUAGES.iter().find(|e| e.key == key).unwrap()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_placeholders() {
        let placeholders = Placeholders::new(Path::new("/contest/abc130/a.cc"));
        assert_eq!(placeholders.exe, PathBuf::from("/contest/abc130/a.exe"));
        assert_eq!(placeholders.jar, PathBuf::from("/contest/abc130/a.jar"));
        assert_eq!(placeholders.dir, PathBuf::from("/contest/abc130"));
        assert_eq!(placeholders.stem, "a");
        assert_eq!(placeholders.class, "AKt");
    }

    #[test]
    fn test_placeholders_apply_inside_word() {
        let placeholders = Placeholders::new(Path::new("/tmp/sol.nim"));
        assert_eq!(placeholders.apply("-o:{exe}"), "-o:/tmp/sol.exe");
    }

    #[test]
    fn test_cpp_commands() {
        let lang = Language::from_entry(entry("CPP"), no_env);
        assert!(lang.need_compilation());
        let build = lang
            .build_command(Path::new("/tmp/foo.cpp"))
            .unwrap()
            .unwrap();
        assert_that!(build).contains("/tmp/foo.cpp".to_string());
        assert_that!(build).contains("-o".to_string());
        assert_that!(build).contains("/tmp/foo.exe".to_string());
        let run = lang.run_command(Path::new("/tmp/foo.cpp")).unwrap();
        assert_eq!(run, vec!["/tmp/foo.exe".to_string()]);
    }

    #[test]
    fn test_python_is_interpreted() {
        let lang = Language::from_entry(entry("PYTHON"), no_env);
        assert!(!lang.need_compilation());
        assert_that!(lang.build_command(Path::new("/tmp/a.py")).unwrap()).is_none();
        let run = lang.run_command(Path::new("/tmp/a.py")).unwrap();
        assert_eq!(run.last().unwrap(), "/tmp/a.py");
    }

    #[test]
    fn test_kotlin_class_name() {
        let lang = Language::from_entry(entry("KOTLIN"), no_env);
        let run = lang.run_command(Path::new("/tmp/main.kt")).unwrap();
        assert_that!(run).contains("MainKt".to_string());
        assert_that!(run).contains("/tmp/main.jar".to_string());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SAMPLE_TEST_CPP_BUILD", "clang++ -O0 -o {exe} '{source}'"),
            ("SAMPLE_TEST_CPP_RUN", "valgrind {exe}"),
        ]
        .into_iter()
        .collect();
        let lang = Language::from_entry(entry("CPP"), |var| env.get(var).map(|v| v.to_string()));
        let build = lang
            .build_command(Path::new("/tmp/my sol.cpp"))
            .unwrap()
            .unwrap();
        assert_eq!(build[0], "clang++");
        assert_eq!(build.last().unwrap(), "/tmp/my sol.cpp");
        let run = lang.run_command(Path::new("/tmp/my sol.cpp")).unwrap();
        assert_eq!(run, vec!["valgrind".to_string(), "/tmp/my sol.exe".to_string()]);
    }

    #[test]
    fn test_empty_build_override_disables_build() {
        let lang = Language::from_entry(entry("RUST"), |var| {
            (var == "SAMPLE_TEST_RUST_BUILD").then(String::new)
        });
        assert!(!lang.need_compilation());
    }

    #[test]
    fn test_invalid_template() {
        let lang = Language::from_entry(entry("PYTHON"), |var| {
            (var == "SAMPLE_TEST_PYTHON_RUN").then(|| "python3 'unterminated".to_string())
        });
        let err = lang.run_command(Path::new("a.py")).unwrap_err();
        assert!(matches!(err, LangError::InvalidTemplate { .. }));
    }
}
