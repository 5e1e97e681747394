//! Bet clamping, wallet settlement, and win classification.

use helixspin_core::{
    engine::{can_afford, settle_credits, SlotEngine, WinClass},
    rng::SpinRng,
};

#[test]
fn bets_clamp_into_the_configured_bounds() {
    let engine = SlotEngine::standard().expect("standard engine");
    let mut rng = SpinRng::seeded(1);
    let meters = engine.fresh_meters();

    let outcome = engine.spin(&mut rng, &meters, 99);
    assert_eq!(outcome.bet_per_line, 10, "over-bets clamp to the max");
    assert_eq!(outcome.total_bet, 500);

    let outcome = engine.spin(&mut rng, &meters, 0);
    assert_eq!(outcome.bet_per_line, 1, "under-bets clamp to the min");
    assert_eq!(outcome.total_bet, 50);
}

#[test]
fn the_wager_covers_every_line() {
    let engine = SlotEngine::standard().expect("standard engine");
    let config = engine.config();

    assert_eq!(config.total_bet(1), 50);
    assert_eq!(config.total_bet(2), 100);
    assert_eq!(config.total_bet(10), 500);
}

#[test]
fn settlement_floors_the_wallet_at_zero() {
    assert_eq!(settle_credits(100, 50, 75), 125);
    assert_eq!(settle_credits(30, 50, 25), 5);
    assert_eq!(settle_credits(30, 50, 0), 0, "a losing spin never underflows");
    assert_eq!(settle_credits(0, 50, 50), 0);
}

#[test]
fn affordability_is_checked_against_the_full_wager() {
    assert!(can_afford(50, 50));
    assert!(!can_afford(49, 50));
    assert!(can_afford(0, 0));
}

#[test]
fn win_classes_follow_the_wager_multiples() {
    assert_eq!(WinClass::classify(0, 50), WinClass::None);
    assert_eq!(WinClass::classify(1, 50), WinClass::Small);
    assert_eq!(WinClass::classify(499, 50), WinClass::Small);
    assert_eq!(WinClass::classify(500, 50), WinClass::Big);
    assert_eq!(WinClass::classify(999, 50), WinClass::Big);
    assert_eq!(WinClass::classify(1_000, 50), WinClass::Mega);
    assert_eq!(WinClass::classify(5_000, 50), WinClass::Mega);
}

#[test]
fn win_class_names_are_stable() {
    assert_eq!(WinClass::None.name(), "none");
    assert_eq!(WinClass::Small.name(), "small");
    assert_eq!(WinClass::Big.name(), "big");
    assert_eq!(WinClass::Mega.name(), "mega");
}
