use std::fmt;
use std::str::FromStr;

use crate::cards::Card;
use crate::errors::HandError;

/// A five-card poker hand with set semantics.
///
/// Duplicate cards collapse and input order is irrelevant: two hands built
/// from the same cards in any order compare equal. Construction fails unless
/// exactly 5 distinct cards remain. Hands are immutable after creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hand {
    // sorted descending by (rank, suit); evaluation relies on this order
    cards: Vec<Card>,
}

impl Hand {
    pub const SIZE: usize = 5;

    pub fn new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        cards.sort_unstable_by(|a, b| b.cmp(a));
        cards.dedup();
        if cards.len() != Self::SIZE {
            return Err(HandError::WrongHandSize { count: cards.len() });
        }
        Ok(Self { cards })
    }

    /// The 5 cards, descending by rank (suit breaks rank ties).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Parses whitespace-separated card tokens, e.g. `"2S 3S 2H 4S 5S"`.
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
