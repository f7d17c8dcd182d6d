//! Batch command handler.
//!
//! Compares hands pairwise from an input file. Each non-empty line holds ten
//! card tokens: the left hand's five followed by the right hand's five.
//! Malformed lines are reported with their line number and skipped; the
//! remaining lines still run.

use std::io::Write;
use std::path::Path;

use showdown_engine::compare::compare_hands;
use showdown_engine::hand::Hand;
use showdown_engine::logger::{ComparisonLogger, ComparisonRecord};

use crate::error::CliError;

pub fn handle_batch_command(
    input: &Path,
    log: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(input)?;

    let mut logger = match log {
        Some(path) => Some(ComparisonLogger::create(path)?),
        None => None,
    };

    let mut compared = 0u32;
    let mut skipped = 0u32;
    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok((left, right)) => {
                let outcome = compare_hands(&left, &right);
                writeln!(out, "{}: {}", line_no, outcome)?;
                if let Some(logger) = &mut logger {
                    let record =
                        ComparisonRecord::from_comparison(logger.next_id(), &left, &right);
                    logger.write(&record)?;
                }
                compared += 1;
            }
            Err(e) => {
                writeln!(err, "line {}: {}", line_no, e)?;
                skipped += 1;
            }
        }
    }

    writeln!(out, "Compared {} line(s), skipped {}", compared, skipped)?;
    if skipped > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} malformed line(s)",
            skipped
        )));
    }
    Ok(())
}

// A batch line is ten card tokens: the left hand, then the right hand.
fn parse_line(line: &str) -> Result<(Hand, Hand), CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 10 {
        return Err(CliError::InvalidInput(format!(
            "expected 10 card tokens, got {}",
            tokens.len()
        )));
    }
    let left: Hand = tokens[..5].join(" ").parse()?;
    let right: Hand = tokens[5..].join(" ").parse()?;
    Ok((left, right))
}
