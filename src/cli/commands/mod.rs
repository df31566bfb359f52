//! Command implementations for the ADIF processor CLI
//!
//! Each command lives in its own module:
//! - `process`: the full pipeline with ADIF or JSON output
//! - `lint`: structural checks on raw input text

pub mod lint;
pub mod process;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the subcommand handler and returns the process exit code:
/// zero on success, one when linting found problems.
pub fn run(args: &Args) -> Result<i32> {
    match args.get_command() {
        Some(Commands::Process(process_args)) => {
            process::run_process(process_args)?;
            Ok(0)
        }
        Some(Commands::Lint(lint_args)) => {
            let failing = lint::run_lint(lint_args)?;
            Ok(if failing > 0 { 1 } else { 0 })
        }
        None => Ok(0),
    }
}
