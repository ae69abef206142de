use clap::Parser;

use atcoder_sample_test::error::NiceError;
use atcoder_sample_test::{
    main_fetch, main_gen_autocompletion, main_run, main_set_login, Command, Opt,
};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();

    match opt.command {
        Command::Run(opt) => main_run(opt),
        Command::Fetch(opt) => main_fetch(opt),
        Command::SetLogin => main_set_login(),
        Command::GenAutocompletion(opt) => main_gen_autocompletion(opt),
    }
    .nice_unwrap()
}
