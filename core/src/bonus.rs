//! The hold-and-spin bonus.
//!
//! Triggering orbs are rolled and locked immediately, then each respin
//! round offers every empty cell one landing chance. Any landing
//! refills the respin counter; a blank round burns one. The bonus ends
//! when the counter is spent or the lock grid is full — a trigger grid
//! that arrives already full plays zero rounds.
//!
//! RULE: A jackpot orb resolves at roll time. It pays the live meter
//! that instant and reseeds it, so a second hit of the same tier in
//! one bonus pays the floor.

use crate::{
    config::SlotConfig,
    grid::{Grid, ROWS},
    jackpot::{JackpotAward, JackpotMeters, JackpotTier},
    rng::SpinRng,
    symbols::Symbol,
    types::Credits,
};
use serde::{Deserialize, Serialize};

/// What one locked orb is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbAward {
    Cash(Credits),
    Jackpot { tier: JackpotTier, amount: Credits },
}

impl OrbAward {
    pub fn amount(&self) -> Credits {
        match self {
            OrbAward::Cash(value) => *value,
            OrbAward::Jackpot { amount, .. } => *amount,
        }
    }
}

/// A fully resolved bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusOutcome {
    /// Row-major lock grid; a cell is Some once an orb landed there.
    pub lock_grid: Vec<Vec<Option<OrbAward>>>,
    pub rounds_played: u32,
    pub total_win: Credits,
    pub jackpot_wins: Vec<JackpotAward>,
    pub meters_after: JackpotMeters,
}

/// Resolve the whole bonus on the spin's RNG stream. `bet_per_line`
/// must already be clamped.
pub fn run_hold_and_spin(
    rng: &mut SpinRng,
    trigger_grid: &Grid,
    meters: JackpotMeters,
    config: &SlotConfig,
    bet_per_line: Credits,
) -> BonusOutcome {
    let reels = trigger_grid.reel_count();
    let cells = ROWS * reels;

    let mut lock_grid: Vec<Vec<Option<OrbAward>>> = vec![vec![None; reels]; ROWS];
    let mut meters = meters;
    let mut jackpot_wins: Vec<JackpotAward> = Vec::new();
    let mut locked = 0usize;

    // Initial pass: every triggering orb is awarded where it sits.
    for row in 0..ROWS {
        for reel in 0..reels {
            if trigger_grid.at(row, reel) == Symbol::Orb {
                let award = roll_orb_award(rng, &mut meters, &mut jackpot_wins, config);
                lock_grid[row][reel] = Some(award);
                locked += 1;
            }
        }
    }

    let fill_rate = config.fill_rate(bet_per_line);
    let mut respins = config.bonus_respins;
    let mut rounds_played = 0u32;

    while respins > 0 && locked < cells {
        rounds_played += 1;
        let mut landed = 0usize;
        for row in 0..ROWS {
            for reel in 0..reels {
                if lock_grid[row][reel].is_some() {
                    continue;
                }
                if rng.chance(fill_rate) {
                    let award = roll_orb_award(rng, &mut meters, &mut jackpot_wins, config);
                    lock_grid[row][reel] = Some(award);
                    landed += 1;
                    locked += 1;
                }
            }
        }
        if landed > 0 {
            respins = config.bonus_respins;
        } else {
            respins -= 1;
        }
    }

    let total_win = lock_grid
        .iter()
        .flatten()
        .filter_map(|cell| cell.as_ref())
        .map(|award| award.amount())
        .sum();

    log::debug!(
        "bonus resolved: {locked}/{cells} orbs over {rounds_played} round(s), {} jackpot(s)",
        jackpot_wins.len()
    );

    BonusOutcome {
        lock_grid,
        rounds_played,
        total_win,
        jackpot_wins,
        meters_after: meters,
    }
}

/// One roll decides jackpot or cash. The rarest tier claims the first
/// slice of the unit interval; a miss on every tier falls through to
/// one weighted draw over the cash table.
fn roll_orb_award(
    rng: &mut SpinRng,
    meters: &mut JackpotMeters,
    jackpot_wins: &mut Vec<JackpotAward>,
    config: &SlotConfig,
) -> OrbAward {
    let roll = rng.next_f64();
    let mut threshold = 0.0;
    for &tier in JackpotTier::ALL.iter().rev() {
        threshold += config.jackpot_rates.get(tier);
        if roll < threshold {
            let amount = meters.take(tier, &config.jackpot_seeds);
            jackpot_wins.push(JackpotAward { tier, amount });
            return OrbAward::Jackpot { tier, amount };
        }
    }

    let weights: Vec<u32> = config.orb_values.iter().map(|v| v.weight).collect();
    let pick = rng.weighted_index(&weights);
    OrbAward::Cash(config.orb_values[pick].value)
}
