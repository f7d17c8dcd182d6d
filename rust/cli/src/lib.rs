//! # Showdown CLI Library
//!
//! Command-line interface for the showdown hand-comparison engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "compare", "2S 3S 2H 4S 5S", "AH QD 9H 7H 5H"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `compare`: Compare two five-card hands and print the outcome
//! - `rank`: Show a hand's best category and its evidence cards
//! - `batch`: Compare hands pairwise from a file, one comparison per line

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod exit_code;

use cli::{Commands, ShowdownCli};
use commands::{handle_batch_command, handle_compare_command, handle_rank_command};
pub use error::CliError;

/// Parses command-line arguments and dispatches to the matching subcommand
/// handler, writing results to `out` and failures to `err`.
///
/// Returns the process exit code: `0` for success, `2` for errors. Help and
/// version requests print to `out` and exit `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Compare { left, right, log } => {
            handle_compare_command(&left, &right, log.as_deref(), out)
        }
        Commands::Rank { hand } => handle_rank_command(&hand, out),
        Commands::Batch { input, log } => handle_batch_command(&input, log.as_deref(), out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
