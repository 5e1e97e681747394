//! Batch simulation for validating the math model.
//!
//! The shipped constants are tuned by inspection, not to a published
//! return target. The realized RTP of a seeded batch is the regression
//! surface: tuning changes are allowed to move it, refactors are not.

use crate::{engine::SlotEngine, jackpot::JackpotMeters, rng::SpinRng, types::Credits};
use serde::{Deserialize, Serialize};

/// Aggregates over a seeded batch of full spins — bonus included,
/// meters carried across spins like a live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub spins: u64,
    pub seed: u64,
    pub bet_per_line: Credits,
    pub wagered: Credits,
    pub returned: Credits,
    pub line_hits: u64,
    pub scatter_hits: u64,
    pub bonus_hits: u64,
    pub jackpot_hits: u64,
    pub largest_win: Credits,
    pub final_meters: JackpotMeters,
}

impl SimulationReport {
    /// Realized return-to-player of the batch.
    pub fn rtp(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.returned as f64 / self.wagered as f64
        }
    }
}

impl SlotEngine {
    /// Run `spins` spins on a fresh seeded stream and fresh meters,
    /// aggregating the realized economics.
    pub fn simulate(&self, spins: u64, bet_per_line: Credits, seed: u64) -> SimulationReport {
        let mut rng = SpinRng::seeded(seed);
        let mut meters = self.fresh_meters();

        let mut report = SimulationReport {
            spins,
            seed,
            bet_per_line: self.config().clamp_bet(bet_per_line),
            wagered: 0,
            returned: 0,
            line_hits: 0,
            scatter_hits: 0,
            bonus_hits: 0,
            jackpot_hits: 0,
            largest_win: 0,
            final_meters: meters,
        };

        for _ in 0..spins {
            let outcome = self.spin(&mut rng, &meters, bet_per_line);
            meters = outcome.meters_after;

            report.wagered += outcome.total_bet;
            report.returned += outcome.total_win;
            if !outcome.line_wins.is_empty() {
                report.line_hits += 1;
            }
            if outcome.scatter_win > 0 {
                report.scatter_hits += 1;
            }
            if outcome.bonus_triggered {
                report.bonus_hits += 1;
            }
            if let Some(bonus) = &outcome.bonus {
                report.jackpot_hits += bonus.jackpot_wins.len() as u64;
            }
            report.largest_win = report.largest_win.max(outcome.total_win);
        }

        report.final_meters = meters;
        log::info!(
            "simulation: {spins} spins at bet {}, realized RTP {:.4}",
            report.bet_per_line,
            report.rtp()
        );
        report
    }
}
