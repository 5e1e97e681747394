//! Orb injection: immunity, the cap, and the draw-consumption
//! contract recorded replays depend on.

use helixspin_core::{config::SlotConfig, grid::Grid, orbs::inject_orbs, rng::SpinRng, symbols::Symbol};

/// Shipped model with certain injection on every eligible cell.
fn certain_injection() -> SlotConfig {
    let mut config = SlotConfig::standard();
    config.orb_base_rate = 1.0;
    config.orb_rate_per_bet = 0.0;
    config
}

fn all_low_window() -> Grid {
    use Symbol::*;
    Grid::from_rows(vec![vec![A; 5], vec![A; 5], vec![A; 5]])
}

#[test]
fn wild_and_scatter_cells_are_immune() {
    use Symbol::*;
    let mut config = certain_injection();
    config.orb_cap_base = 100;

    let grid = Grid::from_rows(vec![
        vec![Wild, A, K, Scatter, Q],
        vec![A, Scatter, J, Ten, Nine],
        vec![K, Q, Wild, Nine, Ten],
    ]);

    let mut rng = SpinRng::seeded(7);
    let (stamped, injected) = inject_orbs(&grid, &mut rng, &config, 1);

    assert_eq!(injected, 11, "all 11 non-immune cells should be stamped");
    assert_eq!(stamped.count(Orb), 11);
    assert_eq!(stamped.at(0, 0), Wild);
    assert_eq!(stamped.at(0, 3), Scatter);
    assert_eq!(stamped.at(1, 1), Scatter);
    assert_eq!(stamped.at(2, 2), Wild);
}

#[test]
fn cap_cuts_off_in_scan_order() {
    use Symbol::*;
    let config = certain_injection();

    let mut rng = SpinRng::seeded(3);
    let (stamped, injected) = inject_orbs(&all_low_window(), &mut rng, &config, 1);

    // Cap at bet 1 is 6 + 1 = 7: the whole top row plus the first two
    // cells of the middle row, row-major.
    assert_eq!(injected, 7);
    assert_eq!(stamped.count(Orb), 7);
    for reel in 0..5 {
        assert_eq!(stamped.at(0, reel), Orb);
    }
    assert_eq!(stamped.at(1, 0), Orb);
    assert_eq!(stamped.at(1, 1), Orb);
    assert_eq!(stamped.at(1, 2), A);
    assert_eq!(stamped.at(2, 4), A);
}

/// Each eligible cell consumes exactly one draw; immune cells and
/// cells passed over after the cap consume none. Verified by stream
/// alignment against a reference RNG.
#[test]
fn immune_cells_consume_no_draw() {
    use Symbol::*;
    let mut config = SlotConfig::standard();
    config.orb_base_rate = 0.0;
    config.orb_rate_per_bet = 0.0;

    let mut rng = SpinRng::seeded(99);
    inject_orbs(&all_low_window(), &mut rng, &config, 1);
    let after_full_scan = rng.next_f64();

    let mut reference = SpinRng::seeded(99);
    for _ in 0..15 {
        reference.next_f64();
    }
    assert_eq!(
        after_full_scan,
        reference.next_f64(),
        "a 15-cell scan must consume exactly 15 draws"
    );

    let mut rows = vec![vec![A; 5], vec![A; 5], vec![A; 5]];
    rows[1][2] = Wild;
    let with_wild = Grid::from_rows(rows);

    let mut rng = SpinRng::seeded(99);
    inject_orbs(&with_wild, &mut rng, &config, 1);
    let after_wild_scan = rng.next_f64();

    let mut reference = SpinRng::seeded(99);
    for _ in 0..14 {
        reference.next_f64();
    }
    assert_eq!(
        after_wild_scan,
        reference.next_f64(),
        "an immune cell must not draw"
    );
}

#[test]
fn cells_past_the_cap_consume_no_draw() {
    let config = certain_injection();

    let mut rng = SpinRng::seeded(5);
    inject_orbs(&all_low_window(), &mut rng, &config, 1);
    let after_capped_scan = rng.next_f64();

    // Seven injections, one draw each; the other eight cells skip.
    let mut reference = SpinRng::seeded(5);
    for _ in 0..7 {
        reference.next_f64();
    }
    assert_eq!(
        after_capped_scan,
        reference.next_f64(),
        "cells passed over after the cap must not draw"
    );
}

#[test]
fn rate_and_cap_scale_with_the_bet() {
    let config = SlotConfig::standard();

    assert!((config.orb_rate(1) - 0.05).abs() < 1e-12);
    assert!((config.orb_rate(10) - 0.095).abs() < 1e-12);
    assert_eq!(config.orb_cap(1), 7);
    assert_eq!(config.orb_cap(10), 16);
}

#[test]
fn zero_rate_injects_nothing() {
    use Symbol::*;
    let mut config = SlotConfig::standard();
    config.orb_base_rate = 0.0;
    config.orb_rate_per_bet = 0.0;

    let mut rng = SpinRng::seeded(1);
    let (stamped, injected) = inject_orbs(&all_low_window(), &mut rng, &config, 10);

    assert_eq!(injected, 0);
    assert_eq!(stamped.count(Orb), 0);
    assert_eq!(stamped.count(A), 15, "the window must be untouched");
}
