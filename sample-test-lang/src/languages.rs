/// An entry of the table of the known languages. See [`Language`](../struct.Language.html) for the
/// meaning of the fields and of the placeholders.
#[derive(Debug)]
pub(crate) struct LanguageEntry {
    pub name: &'static str,
    pub key: &'static str,
    pub extensions: &'static [&'static str],
    pub build: Option<&'static str>,
    pub run: &'static str,
}

/// All the supported languages, ordered by most important first.
pub(crate) const KNOWN_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        name: "C++ / g++",
        key: "CPP",
        extensions: &["cc", "cp", "cpp", "c++", "cxx"],
        build: Some("g++ -std=gnu++1y -O2 -o {exe} {source}"),
        run: "{exe}",
    },
    LanguageEntry {
        name: "Python 3",
        key: "PYTHON",
        extensions: &["py"],
        build: None,
        run: "python3 {source}",
    },
    LanguageEntry {
        name: "Rust / rustc",
        key: "RUST",
        extensions: &["rs"],
        build: Some("rustc -O -o {exe} {source}"),
        run: "{exe}",
    },
    LanguageEntry {
        name: "F# / mono",
        key: "FSHARP",
        extensions: &["fs", "fsx"],
        build: Some("fsharpc --out:{exe} {source}"),
        run: "mono {exe}",
    },
    LanguageEntry {
        name: "Haskell / ghc",
        key: "HASKELL",
        extensions: &["hs"],
        build: Some("ghc -O2 -Wall {source} -o {exe}"),
        run: "{exe}",
    },
    LanguageEntry {
        name: "Kotlin",
        key: "KOTLIN",
        extensions: &["kt"],
        build: Some("kotlinc {source} -include-runtime -d {jar}"),
        run: "kotlin -classpath {jar} -J-Xss256M {class}",
    },
    LanguageEntry {
        name: "Nim",
        key: "NIM",
        extensions: &["nim"],
        build: Some("nim c -d:release -o:{exe} {source}"),
        run: "{exe}",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_unique_names_keys_and_extensions() {
        let names: HashSet<_> = KNOWN_LANGUAGES.iter().map(|l| l.name).collect();
        let keys: HashSet<_> = KNOWN_LANGUAGES.iter().map(|l| l.key).collect();
        let extensions: Vec<_> = KNOWN_LANGUAGES
            .iter()
            .flat_map(|l| l.extensions.iter())
            .collect();
        let unique_extensions: HashSet<_> = extensions.iter().collect();
        assert_eq!(names.len(), KNOWN_LANGUAGES.len());
        assert_eq!(keys.len(), KNOWN_LANGUAGES.len());
        assert_eq!(unique_extensions.len(), extensions.len());
    }

    #[test]
    fn test_templates_are_valid() {
        for entry in KNOWN_LANGUAGES {
            if let Some(build) = entry.build {
                assert!(shell_words::split(build).is_ok(), "{}", entry.name);
            }
            assert!(shell_words::split(entry.run).is_ok(), "{}", entry.name);
        }
    }
}
