use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a full deck: ranks 7..A in four suits.
pub const DECK_SIZE: usize = 32;

/// An ordered pile of unique cards. The top of the pile is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 32 canonical cards, suit-major (♠ ♣ ♦ ♥) and rank-minor (7..A).
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.len(), 32);
    /// assert_eq!(deck.as_slice()[0].to_string(), "7♠");
    /// assert_eq!(deck.as_slice()[31].to_string(), "A♥");
    /// ```
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Wrap an arbitrary card sequence, e.g. a hand-crafted remainder in tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Return a uniformly shuffled copy; `self` is left untouched.
    ///
    /// Fisher–Yates: walk `i` from the last index down to 1 and swap with a
    /// uniform index in `[0, i]`.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Deck { cards }
    }

    /// Shuffled copy using a seeded RNG for reproducibility.
    pub fn shuffled_seeded(&self, seed: u64) -> Deck {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled_with(&mut rng)
    }

    /// Pop one card from the end of the pile.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
