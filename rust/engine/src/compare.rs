use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use crate::rank::{best_evaluation, Evaluation};

/// Result of comparing two hands. Closed three-way outcome; comparison never
/// fails for well-formed hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    LeftWins,
    RightWins,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::LeftWins => "left",
            Outcome::RightWins => "right",
            Outcome::Tie => "tie",
        };
        write!(f, "{s}")
    }
}

/// Determines the winner between two hands.
///
/// Precedence: best category first, then the highest rank within the
/// category's evidence, then a card-by-card comparison of the full hands.
pub fn compare_hands(left: &Hand, right: &Hand) -> Outcome {
    let left_eval = best_evaluation(left);
    let right_eval = best_evaluation(right);

    match compare_evaluations(&left_eval, &right_eval) {
        Some(outcome) => outcome,
        None => compare_kickers(left, right),
    }
}

// `None` means both category and evidence high tie, so the decision falls
// through to the full hands.
fn compare_evaluations(left: &Evaluation, right: &Evaluation) -> Option<Outcome> {
    match left.category.cmp(&right.category) {
        Ordering::Greater => return Some(Outcome::LeftWins),
        Ordering::Less => return Some(Outcome::RightWins),
        Ordering::Equal => {}
    }
    match highest_rank(&left.evidence).cmp(&highest_rank(&right.evidence)) {
        Ordering::Greater => Some(Outcome::LeftWins),
        Ordering::Less => Some(Outcome::RightWins),
        Ordering::Equal => None,
    }
}

// Pairwise over both hands' ranks, highest first; the first position that
// differs decides. Five equal positions is a tie.
fn compare_kickers(left: &Hand, right: &Hand) -> Outcome {
    let left_ranks = ranks_descending(left);
    let right_ranks = ranks_descending(right);
    for (l, r) in left_ranks.iter().zip(right_ranks.iter()) {
        match l.cmp(r) {
            Ordering::Greater => return Outcome::LeftWins,
            Ordering::Less => return Outcome::RightWins,
            Ordering::Equal => {}
        }
    }
    Outcome::Tie
}

fn highest_rank(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|c| c.rank).max()
}

fn ranks_descending(hand: &Hand) -> Vec<Rank> {
    // hand storage is already descending by rank
    hand.cards().iter().map(|c| c.rank).collect()
}
