//! Orb injection, the bonus trigger path.
//!
//! RULE: Scan order is fixed — row 0 left to right, then rows 1 and 2.
//! Wild and Scatter cells are immune and consume no draw, and once the
//! cap is hit the remaining cells are passed over without drawing.
//! Recorded replays depend on this order; never change it.

use crate::{
    config::SlotConfig,
    grid::{Grid, ROWS},
    rng::SpinRng,
    symbols::Symbol,
    types::Credits,
};

/// Stamp orbs onto a copy of the window, one chance roll per eligible
/// cell. Returns the copy and the number injected. `bet_per_line`
/// must already be clamped.
pub fn inject_orbs(
    grid: &Grid,
    rng: &mut SpinRng,
    config: &SlotConfig,
    bet_per_line: Credits,
) -> (Grid, usize) {
    let rate = config.orb_rate(bet_per_line);
    let cap = config.orb_cap(bet_per_line);

    let mut next = grid.clone();
    let mut injected = 0usize;
    for row in 0..ROWS {
        for reel in 0..next.reel_count() {
            let symbol = next.at(row, reel);
            if symbol == Symbol::Wild || symbol == Symbol::Scatter {
                continue;
            }
            if injected >= cap {
                continue;
            }
            if rng.chance(rate) {
                next.set(row, reel, Symbol::Orb);
                injected += 1;
            }
        }
    }
    (next, injected)
}
