use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use sample_test_format::{ProblemId, DEFAULT_BASE_URL};

use crate::gen_autocompletion::GenAutocompletionOpt;

#[derive(Parser, Debug)]
#[clap(
    name = "sample-test",
    version,
    long_version = include_str!(concat!(env!("OUT_DIR"), "/version.txt")),
    about = "Test a solution against the sample cases of its AtCoder problem"
)]
pub struct Opt {
    #[clap(flatten)]
    pub logger: LoggerOpt,

    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile and run a solution against the samples of its problem
    Run(RunOpt),
    /// Download the samples of a problem
    Fetch(FetchOpt),
    /// Store the username and password used for logging in to AtCoder
    SetLogin,
    /// Generate the autocompletion files for the shell
    GenAutocompletion(GenAutocompletionOpt),
}

#[derive(Parser, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the debug messages, same as -vv
    #[clap(long, global = true)]
    pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SiteOpt {
    /// Fetch the problem page without logging in
    #[clap(long = "no-login")]
    pub no_login: bool,

    /// Address of the AtCoder website
    #[clap(long = "base-url", env = "SAMPLE_TEST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RunOpt {
    /// Source file of the solution, its name identifies the problem (e.g. abc130_a.cpp or
    /// abc130/a.cpp)
    pub source: PathBuf,

    /// Use this problem instead of the one deduced from the file name
    #[clap(long = "problem-id")]
    pub problem_id: Option<ProblemId>,

    /// Never use colors in the output
    #[clap(long = "no-color")]
    pub no_color: bool,

    #[clap(flatten)]
    pub site: SiteOpt,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchOpt {
    /// The problem to download (e.g. abc130_a)
    pub problem_id: ProblemId,

    /// Where to write the sample files
    #[clap(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the samples as JSON to stdout
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub site: SiteOpt,
}

impl LoggerOpt {
    /// The verbosity level, taking `--debug` into account.
    pub fn level(&self) -> u8 {
        if self.debug {
            self.verbose.max(2)
        } else {
            self.verbose
        }
    }

    pub fn enable_log(&self) {
        match self.level() {
            0 => {}
            1 => std::env::set_var("RUST_LOG", "info"),
            2 => std::env::set_var("RUST_LOG", "debug"),
            _ => std::env::set_var("RUST_LOG", "trace"),
        }
        if self.level() > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
        }

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}
