//! Dealing: split a shuffled deck into both hands and the draw pile.

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::{Hand, HandError, HAND_SIZE};

/// Cards consumed by a deal: one hand per side.
pub const DEAL_SIZE: usize = HAND_SIZE * 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("not enough cards to deal: need {needed}, got {got}")]
    NotEnoughCards { needed: usize, got: usize },
    #[error("invalid hand dealt: {0}")]
    InvalidHand(#[from] HandError),
}

/// Result of dealing a shuffled deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Deal {
    pub player: Hand,
    pub computer: Hand,
    pub remainder: Deck,
}

/// Player gets the first four cards, the computer the next four; the rest
/// becomes the draw pile in its original order.
///
/// A deck shorter than eight cards is rejected rather than producing a
/// partial hand.
///
/// ```
/// use draw_poker::deal::deal;
/// use draw_poker::deck::Deck;
///
/// let dealt = deal(Deck::ordered()).unwrap();
/// assert_eq!(dealt.player.to_string(), "7♠ 8♠ 9♠ 10♠");
/// assert_eq!(dealt.computer.to_string(), "J♠ Q♠ K♠ A♠");
/// assert_eq!(dealt.remainder.len(), 24);
/// ```
pub fn deal(shuffled: Deck) -> Result<Deal, DealError> {
    if shuffled.len() < DEAL_SIZE {
        return Err(DealError::NotEnoughCards { needed: DEAL_SIZE, got: shuffled.len() });
    }
    let mut cards: Vec<Card> = shuffled.into_vec();
    let rest = cards.split_off(DEAL_SIZE);
    let player = Hand::from_slice(&cards[..HAND_SIZE])?;
    let computer = Hand::from_slice(&cards[HAND_SIZE..])?;
    Ok(Deal { player, computer, remainder: Deck::from_cards(rest) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_deck_is_rejected() {
        let cards = Deck::ordered().as_slice()[..7].to_vec();
        let err = deal(Deck::from_cards(cards)).unwrap_err();
        assert_eq!(err, DealError::NotEnoughCards { needed: 8, got: 7 });
    }

    #[test]
    fn exactly_eight_cards_leaves_empty_pile() {
        let cards = Deck::ordered().as_slice()[..8].to_vec();
        let dealt = deal(Deck::from_cards(cards)).unwrap();
        assert!(dealt.remainder.is_empty());
    }

    #[test]
    fn duplicate_cards_surface_as_hand_error() {
        let d = Deck::ordered();
        let mut cards = d.as_slice()[..7].to_vec();
        cards.insert(1, cards[0]);
        assert!(matches!(deal(Deck::from_cards(cards)), Err(DealError::InvalidHand(_))));
    }
}
