use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::deal::{deal, DealError};
use draw_poker::deck::{Deck, DECK_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

fn sorted(d: &Deck) -> Vec<Card> {
    let mut v = d.as_slice().to_vec();
    v.sort();
    v
}

#[test]
fn ordered_deck_covers_every_rank_and_suit_once() {
    let d = Deck::ordered();
    assert_eq!(d.len(), DECK_SIZE);
    for s in Suit::ALL {
        for r in Rank::ALL {
            let n = d.as_slice().iter().filter(|&&c| c == Card::new(r, s)).count();
            assert_eq!(n, 1, "{r}{s}");
        }
    }
}

#[test]
fn deal_splits_four_four_and_rest() {
    let d = Deck::ordered().shuffled_seeded(3);
    let cards = d.as_slice().to_vec();
    let dealt = deal(d).unwrap();
    assert_eq!(dealt.player.cards().as_slice(), &cards[..4]);
    assert_eq!(dealt.computer.cards().as_slice(), &cards[4..8]);
    assert_eq!(dealt.remainder.as_slice(), &cards[8..]);
    assert_eq!(dealt.remainder.len(), 24);

    let mut seen: HashSet<Card> = HashSet::new();
    let everything = dealt
        .player
        .iter()
        .chain(dealt.computer.iter())
        .chain(dealt.remainder.as_slice().iter().copied());
    for c in everything {
        assert!(seen.insert(c), "duplicate {c}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn deal_rejects_short_deck() {
    let short = Deck::from_cards(Deck::ordered().as_slice()[..5].to_vec());
    assert!(matches!(deal(short), Err(DealError::NotEnoughCards { needed: 8, got: 5 })));
    assert!(matches!(deal(Deck::empty()), Err(DealError::NotEnoughCards { got: 0, .. })));
}

proptest! {
    #[test]
    fn shuffle_is_permutation_and_leaves_input(seed in any::<u64>()) {
        let d = Deck::ordered();
        let s = d.shuffled_seeded(seed);
        prop_assert_eq!(d.clone(), Deck::ordered());
        prop_assert_eq!(sorted(&s), sorted(&d));
    }

    #[test]
    fn shuffle_of_shuffled_is_still_permutation(a in any::<u64>(), b in any::<u64>()) {
        let first = Deck::ordered().shuffled_seeded(a);
        let second = first.shuffled_seeded(b);
        prop_assert_eq!(sorted(&first), sorted(&second));
        prop_assert_eq!(first.len(), DECK_SIZE);
    }
}
