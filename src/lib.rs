//! # atcoder-sample-test
//!
//! This is both an application and a library, the library can be used to achieve the same
//! functionalities of the sample-test binary, inside your application.

#[macro_use]
extern crate log;

pub mod error;
mod fetch;
mod gen_autocompletion;
mod opt;
mod run;
mod set_login;

pub use fetch::{check_identifier, download_samples, main_fetch};
pub use gen_autocompletion::{generate_all, main_gen_autocompletion, GenAutocompletionOpt};
pub use opt::*;
pub use run::{main_run, resolve_problem_id, test_samples};
pub use set_login::{ask_credentials, main_set_login};
