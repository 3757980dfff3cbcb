use crate::cards::Card;
use crate::hand::{Hand, HAND_SIZE};
use std::fmt;

/// Poker hand category from weakest to strongest; the discriminant is the score.
///
/// With four cards a "straight" is four consecutive ranks and a "flush" four
/// cards of one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn score(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Highest card value in the hand. Only set for [`Category::HighCard`].
    pub high_card: Option<u8>,
}

impl Evaluation {
    pub const fn score(&self) -> u8 {
        self.category.score()
    }

    pub const fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Score a four-card hand.
///
/// ```
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "7s 9c Jd Ah".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::HighCard);
/// assert_eq!(eval.high_card, Some(14));
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    let cards = hand.cards();
    let counts = rank_counts(cards);
    let is_flush = is_flush(cards);
    let is_straight = is_straight(cards);
    let top = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    let category = if is_straight && is_flush {
        Category::StraightFlush
    } else if top == 4 {
        Category::FourOfAKind
    } else if top == 3 && second == 2 {
        // Needs five cards; kept so the ladder matches the full ranking.
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if top == 3 {
        Category::ThreeOfAKind
    } else if top == 2 && second == 2 {
        Category::TwoPair
    } else if top == 2 {
        Category::OnePair
    } else {
        let high = cards.iter().map(|c| c.value()).max();
        return Evaluation { category: Category::HighCard, high_card: high };
    };
    Evaluation { category, high_card: None }
}

/// Rank frequencies, largest first. `[2, 1, 1]` is one pair.
fn rank_counts(cards: &[Card; HAND_SIZE]) -> Vec<u8> {
    let mut by_value = [0u8; 15]; // 7..=14 used
    for c in cards {
        by_value[c.value() as usize] += 1;
    }
    let mut counts: Vec<u8> = by_value.into_iter().filter(|&n| n > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

/// Every value exactly one above its predecessor once sorted. No ace-low wrap.
fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let mut values = cards.map(|c| c.value());
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}
