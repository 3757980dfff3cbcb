use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards held by each side.
pub const HAND_SIZE: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 4 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly four distinct cards owned by one side for the duration of a round.
///
/// ```
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "7s 8s 9s 10s".parse().unwrap();
/// assert_eq!(hand.cards().len(), 4);
/// assert_eq!(hand.to_string(), "7♠ 8♠ 9♠ 10♠");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }

    /// Swap the card in `index` for `card`. Callers draw `card` from a pile
    /// disjoint from this hand, so distinctness holds.
    pub(crate) fn replace(&mut self, index: usize, card: Card) {
        self.0[index] = card;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Card::to_string).collect();
        f.write_str(&parts.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hand_requires_four_cards() {
        let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
        assert!(matches!(Hand::from_slice(&cards), Err(HandError::CardCount(2))));
        assert!(matches!("7s 8s 9s 10s Js".parse::<Hand>(), Err(HandError::CardCount(5))));
    }

    #[test]
    fn hand_rejects_duplicates() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        let q = Card::new(Rank::Queen, Suit::Spades);
        assert!(matches!(Hand::try_new([a, k, q, a]), Err(HandError::DuplicateCards)));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!("7s 8s 9s 2s".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn replace_swaps_one_slot() {
        let mut hand: Hand = "7s 8s 9s 10s".parse().unwrap();
        hand.replace(2, Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.to_string(), "7♠ 8♠ A♥ 10♠");
        assert_eq!(hand.get(4), None);
    }
}
