//! Command handler modules for the showdown CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod batch;
mod compare;
mod rank;

pub use batch::handle_batch_command;
pub use compare::handle_compare_command;
pub use rank::handle_rank_command;
