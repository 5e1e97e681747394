//! The validation gate: every malformed model an engine could
//! misbehave on must be refused at construction.

use helixspin_core::{
    config::SlotConfig,
    engine::SlotEngine,
    error::SlotError,
    symbols::Symbol,
};

#[test]
fn the_shipped_model_validates() {
    let config = SlotConfig::standard();
    config.validate().expect("shipped model must validate");

    assert_eq!(config.reel_count(), 5);
    assert_eq!(config.line_count(), 50);
    assert_eq!(config.strips[0].len(), 40);
}

#[test]
fn short_strips_are_rejected() {
    use Symbol::*;
    let mut config = SlotConfig::standard();
    config.strips[2] = vec![A, K];

    assert!(matches!(
        config.validate(),
        Err(SlotError::StripTooShort { reel: 2, len: 2, .. })
    ));
}

#[test]
fn orbs_on_a_strip_are_rejected() {
    let mut config = SlotConfig::standard();
    config.strips[0].push(Symbol::Orb);

    assert!(matches!(
        config.validate(),
        Err(SlotError::OrbOnStrip { reel: 0 })
    ));
}

#[test]
fn ragged_paylines_are_rejected() {
    let mut config = SlotConfig::standard();
    config.paylines[4] = vec![0, 1];

    assert!(matches!(
        config.validate(),
        Err(SlotError::PaylineLengthMismatch { line: 4, len: 2, expected: 5 })
    ));
}

#[test]
fn out_of_window_payline_rows_are_rejected() {
    let mut config = SlotConfig::standard();
    config.paylines[0] = vec![0, 1, 2, 1, 3];

    assert!(matches!(
        config.validate(),
        Err(SlotError::PaylineRowOutOfRange { line: 0, row: 3, .. })
    ));
}

#[test]
fn paytable_gaps_are_rejected() {
    let mut config = SlotConfig::standard();
    config.line_pays.remove(&Symbol::Q);

    match config.validate() {
        Err(SlotError::PaytableGap { symbol }) => assert_eq!(symbol, "Q"),
        other => panic!("expected a paytable gap, got {other:?}"),
    }
}

#[test]
fn an_unusable_orb_table_is_rejected() {
    let mut config = SlotConfig::standard();
    config.orb_values.clear();
    assert!(matches!(config.validate(), Err(SlotError::EmptyOrbTable)));

    let mut config = SlotConfig::standard();
    for orb in &mut config.orb_values {
        orb.weight = 0;
    }
    assert!(matches!(config.validate(), Err(SlotError::EmptyOrbTable)));
}

#[test]
fn non_positive_jackpot_floors_are_rejected() {
    let mut config = SlotConfig::standard();
    config.jackpot_seeds.major = 0.0;

    assert!(matches!(
        config.validate(),
        Err(SlotError::NonPositiveJackpotFloor { tier: "major", .. })
    ));
}

#[test]
fn inverted_bet_bounds_are_rejected() {
    let mut config = SlotConfig::standard();
    config.min_bet_per_line = 5;
    config.max_bet_per_line = 2;

    assert!(matches!(
        config.validate(),
        Err(SlotError::BetBoundsInverted { min: 5, max: 2 })
    ));
}

#[test]
fn the_engine_refuses_a_broken_model() {
    let mut config = SlotConfig::standard();
    config.paylines.push(vec![0, 0, 0]);

    assert!(SlotEngine::new(config).is_err());
}

#[test]
fn loading_a_missing_file_fails() {
    assert!(SlotConfig::load("/nonexistent/helixspin-model.json").is_err());
}

/// The JSON shape on disk is the struct itself: a serialized model
/// loads back through the same validation gate.
#[test]
fn a_serialized_model_loads_back() {
    let path = std::env::temp_dir().join(format!("helixspin-model-{}.json", std::process::id()));
    let path_str = path.to_str().expect("utf-8 temp path").to_string();

    let config = SlotConfig::standard();
    let json = serde_json::to_string_pretty(&config).expect("serialize model");
    std::fs::write(&path, json).expect("write model");

    let loaded = SlotConfig::load(&path_str).expect("load model");
    assert_eq!(loaded.line_count(), config.line_count());
    assert_eq!(loaded.strips, config.strips);
    assert_eq!(loaded.orb_trigger_count, config.orb_trigger_count);
    assert_eq!(loaded.jackpot_seeds, config.jackpot_seeds);

    let _ = std::fs::remove_file(&path);
}
