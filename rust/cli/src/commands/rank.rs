//! Rank command handler.
//!
//! Parses a single hand and prints its best category together with the
//! evidence cards that substantiate it.

use std::io::Write;

use showdown_engine::hand::Hand;
use showdown_engine::rank::best_evaluation;

use crate::error::CliError;

pub fn handle_rank_command(hand: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hand: Hand = hand.parse()?;
    let eval = best_evaluation(&hand);

    let evidence: Vec<String> = eval.evidence.iter().map(|c| c.to_string()).collect();

    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Category: {:?}", eval.category)?;
    writeln!(out, "Evidence: {}", evidence.join(" "))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_command_reports_category_and_evidence() {
        let mut out = Vec::new();
        handle_rank_command("2D 3H 2S 3D 3C", &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: FullHouse"), "output: {}", output);
        // full house evidence is the whole hand
        let evidence_line = output
            .lines()
            .find(|l| l.starts_with("Evidence:"))
            .unwrap();
        assert_eq!(evidence_line.split_whitespace().count(), 6);
    }

    #[test]
    fn rank_command_reports_high_card_evidence() {
        let mut out = Vec::new();
        handle_rank_command("6D 7H AH 7S QC", &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: OnePair"), "output: {}", output);
        assert!(output.contains("Evidence: 7"), "output: {}", output);
    }

    #[test]
    fn rank_command_rejects_malformed_hands() {
        let mut out = Vec::new();
        let result = handle_rank_command("not a hand", &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
