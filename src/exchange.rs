//! Card exchange ("drop"): replace selected hand cards from the draw pile.

use crate::deck::Deck;
use crate::hand::{Hand, HAND_SIZE};

/// Exchanges allowed per round.
pub const MAX_EXCHANGES: u8 = 3;

/// One selection flag per hand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Selection([bool; HAND_SIZE]);

impl Selection {
    pub fn new(flags: [bool; HAND_SIZE]) -> Self {
        Self(flags)
    }

    /// Flip one slot. Returns the new flag, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.0.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&f| f)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&f| f).count()
    }

    pub fn clear(&mut self) {
        self.0 = [false; HAND_SIZE];
    }

    pub fn flags(&self) -> [bool; HAND_SIZE] {
        self.0
    }
}

/// Outcome of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Exchange {
    pub hand: Hand,
    pub remainder: Deck,
    /// Slots that actually received a new card.
    pub replaced: usize,
}

/// Replace each selected slot, in slot order, with a card popped from the
/// end of `remainder`. Once the pile runs dry the remaining selected slots
/// keep their cards. Inputs are not modified.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::exchange::{drop_selected, Selection};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "7s 8s 9s 10s".parse().unwrap();
/// let pile = Deck::from_cards(draw_poker::cards::parse_cards("Ah Kh").unwrap());
/// let out = drop_selected(&hand, &Selection::new([false, true, false, false]), &pile);
/// assert_eq!(out.hand.to_string(), "7♠ K♥ 9♠ 10♠");
/// assert_eq!(out.remainder.len(), 1);
/// ```
pub fn drop_selected(hand: &Hand, selection: &Selection, remainder: &Deck) -> Exchange {
    let mut hand = *hand;
    let mut remainder = remainder.clone();
    let mut replaced = 0;
    for index in 0..HAND_SIZE {
        if !selection.is_selected(index) {
            continue;
        }
        // Empty pile: the slot keeps its card.
        if let Some(card) = remainder.draw() {
            hand.replace(index, card);
            replaced += 1;
        }
    }
    Exchange { hand, remainder, replaced }
}
