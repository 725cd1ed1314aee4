//! # licenser
//!
//! A tool that ensures source files carry an approved license header.

mod cli;

use std::process::ExitCode;

use crate::cli::{Cli, run_check, usage_exit};

fn main() -> ExitCode {
  match Cli::parse_args() {
    Ok(cli) => run_check(cli),
    Err(err) => usage_exit(&err),
  }
}
