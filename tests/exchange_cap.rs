use draw_poker::config::RoundConfig;
use draw_poker::exchange::MAX_EXCHANGES;
use draw_poker::round::{ActionError, Phase, Round};

fn dealt_round(seed: u64) -> Round {
    let mut r = Round::new(RoundConfig::default().with_seed(seed));
    r.start_game().expect("deal");
    r
}

#[test]
fn drop_replaces_only_selected_slot() {
    let mut r = dealt_round(5);
    let before = *r.player_hand().unwrap();
    r.toggle_card_selection(1).unwrap();
    r.drop_selected_cards().unwrap();
    let after = *r.player_hand().unwrap();
    assert_eq!(after.get(0), before.get(0));
    assert_ne!(after.get(1), before.get(1));
    assert_eq!(after.get(2), before.get(2));
    assert_eq!(after.get(3), before.get(3));
    assert_eq!(r.remaining(), 23);
    assert!(!r.selection().any());
    assert_eq!(r.exchanges_used(), 1);
    assert_eq!(r.phase(), Phase::Dealt);
}

#[test]
fn fourth_drop_is_rejected_and_changes_nothing() {
    let mut r = dealt_round(9);
    for n in 1..=MAX_EXCHANGES {
        r.toggle_card_selection(0).unwrap();
        r.drop_selected_cards().unwrap();
        assert_eq!(r.exchanges_used(), n);
    }
    r.toggle_card_selection(0).unwrap();
    assert!(!r.drop_enabled());
    let hand = *r.player_hand().unwrap();
    let remaining = r.remaining();
    assert_eq!(
        r.drop_selected_cards(),
        Err(ActionError::ExchangeCapReached { max: MAX_EXCHANGES })
    );
    assert_eq!(r.player_hand(), Some(&hand));
    assert_eq!(r.remaining(), remaining);
    assert_eq!(r.exchanges_used(), MAX_EXCHANGES);
}

#[test]
fn full_hand_exchanges_drain_the_pile() {
    let mut r = dealt_round(1);
    for _ in 0..MAX_EXCHANGES {
        for i in 0..4 {
            r.toggle_card_selection(i).unwrap();
        }
        r.drop_selected_cards().unwrap();
    }
    assert_eq!(r.remaining(), 24 - 12);
    let mut all: Vec<_> = r.player_hand().unwrap().iter().collect();
    all.extend(r.computer_hand().unwrap().iter());
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 8);
}

#[test]
fn drop_disabled_after_reveal() {
    let mut r = dealt_round(2);
    r.toggle_card_selection(3).unwrap();
    assert!(r.drop_enabled());
    r.handle_reveal().unwrap();
    assert!(!r.drop_enabled());
    assert_eq!(r.drop_selected_cards(), Err(ActionError::RevealStarted));
    assert_eq!(r.exchanges_used(), 0);
}
