//! Compare command handler.
//!
//! Parses two hands, prints each hand's matched category and the outcome,
//! and optionally writes a JSONL comparison record.

use std::io::Write;
use std::path::Path;

use showdown_engine::compare::compare_hands;
use showdown_engine::hand::Hand;
use showdown_engine::logger::{ComparisonLogger, ComparisonRecord};
use showdown_engine::rank::best_evaluation;

use crate::error::CliError;

pub fn handle_compare_command(
    left: &str,
    right: &str,
    log: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let left: Hand = left.parse()?;
    let right: Hand = right.parse()?;

    let left_eval = best_evaluation(&left);
    let right_eval = best_evaluation(&right);
    let outcome = compare_hands(&left, &right);

    writeln!(out, "Left:  {} ({:?})", left, left_eval.category)?;
    writeln!(out, "Right: {} ({:?})", right, right_eval.category)?;
    writeln!(out, "Outcome: {}", outcome)?;

    if let Some(path) = log {
        let mut logger = ComparisonLogger::create(path)?;
        let record = ComparisonRecord::from_comparison(logger.next_id(), &left, &right);
        logger.write(&record)?;
    }

    Ok(())
}
