use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Card, Rank};
use crate::hand::Hand;

/// Hand categories, weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
}

/// Categories in evaluation precedence order: the first entry with non-empty
/// evidence is a hand's best category.
pub const PRECEDENCE: [Category; 7] = [
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPairs,
    Category::OnePair,
    Category::HighCard,
];

/// The matched category of a hand together with the cards substantiating it.
/// Computed fresh per comparison, never persisted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub category: Category,
    pub evidence: Vec<Card>,
}

impl Category {
    /// Evidence cards for this category, or empty when the hand does not
    /// satisfy it. Total over any valid hand.
    pub fn evaluate(self, hand: &Hand) -> Vec<Card> {
        match self {
            Category::HighCard => high_card(hand),
            Category::OnePair => many_of_a_kind(hand, 2),
            Category::TwoPairs => two_pairs(hand),
            Category::ThreeOfAKind => many_of_a_kind(hand, 3),
            Category::Straight => straight(hand),
            Category::Flush => flush(hand),
            Category::FullHouse => full_house(hand),
        }
    }
}

/// Strongest applicable category for `hand`, with its evidence.
pub fn best_evaluation(hand: &Hand) -> Evaluation {
    for category in PRECEDENCE {
        let evidence = category.evaluate(hand);
        if !evidence.is_empty() {
            return Evaluation { category, evidence };
        }
    }
    // HighCard always matches, so the loop returns before reaching here
    Evaluation {
        category: Category::HighCard,
        evidence: high_card(hand),
    }
}

fn high_card(hand: &Hand) -> Vec<Card> {
    // hand storage is descending, so the first card carries the top rank
    hand.cards().iter().take(1).copied().collect()
}

// First rank group holding at least `n` cards, visited from Ace down so the
// strongest qualifying group wins.
fn many_of_a_kind(hand: &Hand, n: usize) -> Vec<Card> {
    for rank in all_ranks().into_iter().rev() {
        let group = cards_of_rank(hand, rank);
        if group.len() >= n {
            return group.into_iter().take(n).collect();
        }
    }
    Vec::new()
}

// Two cards from each of the two highest rank groups with at least a pair.
fn two_pairs(hand: &Hand) -> Vec<Card> {
    let mut evidence: Vec<Card> = Vec::new();
    let mut groups = 0;
    for rank in all_ranks().into_iter().rev() {
        let group = cards_of_rank(hand, rank);
        if group.len() >= 2 {
            evidence.extend(group.into_iter().take(2));
            groups += 1;
            if groups == 2 {
                break;
            }
        }
    }
    if groups == 2 && evidence.len() == 4 {
        evidence
    } else {
        Vec::new()
    }
}

// 5 distinct ranks spanning exactly 4 steps. Suits are not consulted, and
// there is no ace-low run: rank order is the fixed Two..Ace enumeration.
fn straight(hand: &Hand) -> Vec<Card> {
    let mut ranks: Vec<u8> = hand.cards().iter().map(|c| c.rank as u8).collect();
    ranks.sort_unstable();
    ranks.dedup();
    if ranks.len() == Hand::SIZE && ranks[Hand::SIZE - 1] - ranks[0] == 4 {
        hand.cards().to_vec()
    } else {
        Vec::new()
    }
}

fn flush(hand: &Hand) -> Vec<Card> {
    let cards = hand.cards();
    if cards.iter().all(|c| c.suit == cards[0].suit) {
        cards.to_vec()
    } else {
        Vec::new()
    }
}

// Three cards of one rank plus two of another, i.e. group sizes {3, 2}.
fn full_house(hand: &Hand) -> Vec<Card> {
    let mut counts: Vec<usize> = all_ranks()
        .into_iter()
        .map(|rank| cards_of_rank(hand, rank).len())
        .filter(|&n| n > 0)
        .collect();
    counts.sort_unstable();
    if counts == [2, 3] {
        hand.cards().to_vec()
    } else {
        Vec::new()
    }
}

fn cards_of_rank(hand: &Hand, rank: Rank) -> Vec<Card> {
    hand.cards()
        .iter()
        .filter(|c| c.rank == rank)
        .copied()
        .collect()
}
