use draw_poker::evaluator::{evaluate, Category};
use draw_poker::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn category_straight_flush() {
    let e = evaluate(&hand("7♠ 8♠ 9♠ 10♠"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.score(), 8);
    assert_eq!(e.label(), "Straight Flush");
}

#[test]
fn category_four_of_a_kind() {
    let e = evaluate(&hand("7♠ 7♣ 7♦ 7♥"));
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.score(), 7);
    assert_eq!(e.label(), "Four of a Kind");
}

#[test]
fn category_flush() {
    let e = evaluate(&hand("7h 9h Qh Ah"));
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.score(), 5);
}

#[test]
fn category_straight() {
    let e = evaluate(&hand("Jc Qd Kh As"));
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.score(), 4);
}

#[test]
fn category_three_of_a_kind() {
    let e = evaluate(&hand("7♠ 7♣ 7♦ 8♥"));
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.score(), 3);
    assert_eq!(e.label(), "Three of a Kind");
}

#[test]
fn category_two_pair() {
    let e = evaluate(&hand("7♠ 7♣ 8♦ 8♥"));
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.score(), 2);
    assert_eq!(e.label(), "Two Pair");
}

#[test]
fn category_one_pair() {
    let e = evaluate(&hand("Ks Kc 8d 10h"));
    assert_eq!(e.category, Category::OnePair);
    assert_eq!(e.score(), 1);
    assert_eq!(e.label(), "One Pair");
}

#[test]
fn category_high_card() {
    let e = evaluate(&hand("7♠ 9♣ J♦ A♥"));
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.score(), 0);
    assert_eq!(e.label(), "High Card");
    assert_eq!(e.high_card, Some(14));
}

#[test]
fn full_house_unreachable_with_four_cards() {
    // Three of a kind plus one card is as close as four cards get.
    let e = evaluate(&hand("Qs Qc Qd Kh"));
    assert_ne!(e.category, Category::FullHouse);
}
