//! Engine configuration: strips, lines, pay tables, tuning constants.
//!
//! Everything tunable is plain data here. standard() is the shipped
//! math model; load() reads a JSON file with the same shape. Both go
//! through validate() before an engine will accept them — a bad model
//! is fatal at construction, never a spin-time surprise.

use crate::{
    error::{SlotError, SlotResult},
    grid::ROWS,
    jackpot::{JackpotTier, TierValues},
    symbols::Symbol,
    types::{Credits, Row},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Line-pay multipliers for runs of 3, 4 and 5, applied per unit of
/// bet-per-line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinePay {
    pub three: f64,
    pub four: f64,
    pub five: f64,
}

impl LinePay {
    /// Multiplier for a run length. Lengths outside the table pay 0.
    pub fn for_run(&self, len: usize) -> f64 {
        match len {
            3 => self.three,
            4 => self.four,
            5 => self.five,
            _ => 0.0,
        }
    }
}

/// One weighted cash award on the orb value table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbValue {
    pub value: Credits,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    /// One strip per reel, read top to bottom.
    pub strips: Vec<Vec<Symbol>>,
    /// One row index per reel.
    pub paylines: Vec<Vec<Row>>,
    pub line_pays: HashMap<Symbol, LinePay>,
    /// Scatter-count → multiplier of the total bet. Lookup misses pay 0.
    pub scatter_pays: HashMap<usize, f64>,

    /// Injected orbs needed to trigger hold-and-spin.
    pub orb_trigger_count: usize,
    /// Per-cell injection chance is base + clamped bet × per-bet.
    pub orb_base_rate: f64,
    pub orb_rate_per_bet: f64,
    /// Injection cap is base + clamped bet.
    pub orb_cap_base: usize,
    pub orb_values: Vec<OrbValue>,

    pub bonus_respins: u32,
    /// Per-empty-cell landing chance is base + clamped bet × per-bet.
    pub bonus_fill_base_rate: f64,
    pub bonus_fill_rate_per_bet: f64,

    pub jackpot_seeds: TierValues,
    /// Per-orb-roll trigger probability, by tier.
    pub jackpot_rates: TierValues,
    /// Share of each wager added to the pools, by tier.
    pub contribution_rates: TierValues,

    pub min_bet_per_line: Credits,
    pub max_bet_per_line: Credits,
}

impl SlotConfig {
    pub fn reel_count(&self) -> usize {
        self.strips.len()
    }

    pub fn line_count(&self) -> usize {
        self.paylines.len()
    }

    pub fn clamp_bet(&self, bet_per_line: Credits) -> Credits {
        bet_per_line.clamp(self.min_bet_per_line, self.max_bet_per_line)
    }

    /// The wager for one spin: bet-per-line across every line.
    pub fn total_bet(&self, bet_per_line: Credits) -> Credits {
        bet_per_line * self.line_count() as Credits
    }

    /// Per-cell orb injection chance at a clamped bet.
    pub fn orb_rate(&self, bet_per_line: Credits) -> f64 {
        self.orb_base_rate + bet_per_line as f64 * self.orb_rate_per_bet
    }

    /// Most orbs a single injection pass may stamp.
    pub fn orb_cap(&self, bet_per_line: Credits) -> usize {
        self.orb_cap_base + bet_per_line as usize
    }

    /// Per-empty-cell landing chance during a bonus round.
    pub fn fill_rate(&self, bet_per_line: Credits) -> f64 {
        self.bonus_fill_base_rate + bet_per_line as f64 * self.bonus_fill_rate_per_bet
    }

    /// Load a JSON math model and run it through the validation gate.
    pub fn load(path: &str) -> SlotResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SlotConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject any model an engine could misbehave on. Fatal at
    /// construction; spins never re-check.
    pub fn validate(&self) -> SlotResult<()> {
        for (reel, strip) in self.strips.iter().enumerate() {
            if strip.len() < ROWS {
                return Err(SlotError::StripTooShort {
                    reel,
                    len: strip.len(),
                    min: ROWS,
                });
            }
            if strip.contains(&Symbol::Orb) {
                return Err(SlotError::OrbOnStrip { reel });
            }
        }

        for (line, rows) in self.paylines.iter().enumerate() {
            if rows.len() != self.reel_count() {
                return Err(SlotError::PaylineLengthMismatch {
                    line,
                    len: rows.len(),
                    expected: self.reel_count(),
                });
            }
            for &row in rows {
                if row >= ROWS {
                    return Err(SlotError::PaylineRowOutOfRange {
                        line,
                        row,
                        rows: ROWS,
                    });
                }
            }
        }

        for strip in &self.strips {
            for symbol in strip {
                if symbol.pays_on_lines() && !self.line_pays.contains_key(symbol) {
                    return Err(SlotError::PaytableGap {
                        symbol: symbol.label().to_string(),
                    });
                }
            }
        }

        let orb_weight: u32 = self.orb_values.iter().map(|v| v.weight).sum();
        if self.orb_values.is_empty() || orb_weight == 0 {
            return Err(SlotError::EmptyOrbTable);
        }

        for tier in JackpotTier::ALL {
            let floor = self.jackpot_seeds.get(tier);
            if floor <= 0.0 {
                return Err(SlotError::NonPositiveJackpotFloor {
                    tier: tier.name(),
                    value: floor,
                });
            }
        }

        if self.min_bet_per_line > self.max_bet_per_line {
            return Err(SlotError::BetBoundsInverted {
                min: self.min_bet_per_line,
                max: self.max_bet_per_line,
            });
        }

        Ok(())
    }

    /// The shipped math model.
    pub fn standard() -> Self {
        use Symbol::*;

        let line_pays: HashMap<Symbol, LinePay> = [
            (A, LinePay { three: 4.0, four: 8.0, five: 16.0 }),
            (K, LinePay { three: 4.0, four: 9.0, five: 18.0 }),
            (Q, LinePay { three: 4.0, four: 10.0, five: 20.0 }),
            (J, LinePay { three: 4.0, four: 10.0, five: 22.0 }),
            (Ten, LinePay { three: 3.0, four: 8.0, five: 18.0 }),
            (Nine, LinePay { three: 3.0, four: 7.0, five: 16.0 }),
            (Cryo, LinePay { three: 6.0, four: 18.0, five: 45.0 }),
            (Helix, LinePay { three: 8.0, four: 24.0, five: 60.0 }),
            (Virus, LinePay { three: 10.0, four: 30.0, five: 80.0 }),
            (Core, LinePay { three: 12.0, four: 40.0, five: 110.0 }),
            (Wild, LinePay { three: 15.0, four: 60.0, five: 200.0 }),
        ]
        .into();

        Self {
            strips: (0..5).map(|_| standard_strip()).collect(),
            paylines: standard_paylines(),
            line_pays,
            scatter_pays: [(3, 4.0), (4, 20.0), (5, 100.0)].into(),
            orb_trigger_count: 6,
            orb_base_rate: 0.045,
            orb_rate_per_bet: 0.005,
            orb_cap_base: 6,
            orb_values: vec![
                OrbValue { value: 6, weight: 18 },
                OrbValue { value: 8, weight: 16 },
                OrbValue { value: 10, weight: 14 },
                OrbValue { value: 12, weight: 12 },
                OrbValue { value: 15, weight: 10 },
                OrbValue { value: 20, weight: 8 },
                OrbValue { value: 25, weight: 6 },
                OrbValue { value: 40, weight: 4 },
                OrbValue { value: 60, weight: 2 },
                OrbValue { value: 90, weight: 1 },
            ],
            bonus_respins: 3,
            bonus_fill_base_rate: 0.16,
            bonus_fill_rate_per_bet: 0.005,
            jackpot_seeds: TierValues {
                mini: 40.0,
                minor: 120.0,
                major: 450.0,
                grand: 2400.0,
            },
            jackpot_rates: TierValues {
                mini: 0.02,
                minor: 0.012,
                major: 0.006,
                grand: 0.002,
            },
            contribution_rates: TierValues {
                mini: 0.02,
                minor: 0.01,
                major: 0.005,
                grand: 0.001,
            },
            min_bet_per_line: 1,
            max_bet_per_line: 10,
        }
    }
}

/// The shipped 40-symbol strip, identical on all five reels: three
/// low-pay cycles, the four high symbols, two more low cycles, then
/// the single wild and scatter with a low tail.
fn standard_strip() -> Vec<Symbol> {
    use Symbol::*;

    let mut strip = Vec::with_capacity(40);
    for _ in 0..3 {
        strip.extend([A, K, Q, J, Ten, Nine]);
    }
    strip.extend([Cryo, Helix, Virus, Core]);
    for _ in 0..2 {
        strip.extend([A, K, Q, J, Ten, Nine]);
    }
    strip.extend([Wild, Scatter, A, K, Q, J]);
    strip
}

/// The shipped 50-line layout: straights, vees, zigzags, then the
/// looser weaves.
#[rustfmt::skip]
fn standard_paylines() -> Vec<Vec<Row>> {
    vec![
        vec![1, 1, 1, 1, 1],
        vec![0, 0, 0, 0, 0],
        vec![2, 2, 2, 2, 2],
        vec![0, 1, 2, 1, 0],
        vec![2, 1, 0, 1, 2],
        vec![1, 0, 0, 0, 1],
        vec![1, 2, 2, 2, 1],
        vec![0, 0, 1, 0, 0],
        vec![2, 2, 1, 2, 2],
        vec![0, 1, 1, 1, 0],
        vec![2, 1, 1, 1, 2],
        vec![1, 0, 1, 2, 1],
        vec![1, 2, 1, 0, 1],
        vec![0, 1, 0, 1, 0],
        vec![2, 1, 2, 1, 2],
        vec![0, 1, 2, 2, 2],
        vec![2, 1, 0, 0, 0],
        vec![0, 0, 0, 1, 2],
        vec![2, 2, 2, 1, 0],
        vec![1, 1, 0, 1, 1],
        vec![1, 1, 2, 1, 1],
        vec![0, 2, 0, 2, 0],
        vec![2, 0, 2, 0, 2],
        vec![0, 2, 2, 2, 0],
        vec![2, 0, 0, 0, 2],
        vec![0, 1, 1, 2, 2],
        vec![2, 1, 1, 0, 0],
        vec![1, 2, 2, 1, 0],
        vec![1, 0, 0, 1, 2],
        vec![0, 2, 1, 2, 0],
        vec![2, 0, 1, 0, 2],
        vec![1, 0, 1, 1, 2],
        vec![1, 2, 1, 1, 0],
        vec![0, 1, 2, 1, 2],
        vec![2, 1, 0, 1, 0],
        vec![0, 0, 1, 1, 2],
        vec![2, 2, 1, 1, 0],
        vec![1, 0, 2, 0, 1],
        vec![1, 2, 0, 2, 1],
        vec![0, 2, 1, 0, 0],
        vec![2, 0, 1, 2, 2],
        vec![0, 1, 0, 2, 2],
        vec![2, 1, 2, 0, 0],
        vec![1, 2, 0, 1, 2],
        vec![1, 0, 2, 1, 0],
        vec![0, 2, 0, 1, 2],
        vec![2, 0, 2, 1, 0],
        vec![0, 1, 2, 0, 1],
        vec![2, 1, 0, 2, 1],
        vec![1, 0, 2, 2, 1],
    ]
}
