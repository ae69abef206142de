//! Generation of the autocompletion scripts, by default inside the target/autocompletion directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell};

/// Name of the binary the scripts complete.
const BIN_NAME: &str = "sample-test";

#[derive(Parser, Debug, Clone)]
pub struct GenAutocompletionOpt {
    /// Where to write the autocompletion files
    #[clap(short = 't', long = "target")]
    pub target: Option<PathBuf>,
}

pub fn main_gen_autocompletion(opt: GenAutocompletionOpt) -> Result<(), Error> {
    let target = opt
        .target
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("target/autocompletion"));
    let written = generate_all(&target)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Write the scripts for all the supported shells inside `target`, returning their paths.
pub fn generate_all(target: &Path) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(target)
        .with_context(|| format!("Failed to create target dir: {}", target.display()))?;
    [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::Elvish,
        Shell::PowerShell,
    ]
    .into_iter()
    .map(|shell| generate(shell, target))
    .collect()
}

fn generate(shell: Shell, target: &Path) -> Result<PathBuf, Error> {
    let target = target.join(shell.file_name(BIN_NAME));
    let mut file = File::create(&target).with_context(|| {
        format!(
            "Failed to create completion for {} at {}",
            shell,
            target.display()
        )
    })?;
    let mut command = crate::Opt::command();
    clap_complete::generate(shell, &mut command, BIN_NAME, &mut file);
    debug!("Written {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_all() {
        let tmpdir = TempDir::new().unwrap();
        let written = generate_all(tmpdir.path()).unwrap();
        assert_that!(written).has_length(5);
        let bash = tmpdir.path().join("sample-test.bash");
        assert_that!(bash.exists()).is_true();
        let content = std::fs::read_to_string(bash).unwrap();
        assert_that!(content.as_str()).contains("set-login");
    }
}
