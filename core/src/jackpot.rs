//! Progressive jackpot tiers and the four live meters.
//!
//! RULE: Meter state is explicit. The engine takes the caller's
//! meters, returns the post-spin meters on the outcome, and keeps
//! nothing. A meter never sits below its configured floor.

use crate::types::Credits;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JackpotTier {
    Mini,
    Minor,
    Major,
    Grand,
}

impl JackpotTier {
    /// Ascending by floor. The award roll walks this reversed so the
    /// rarest tier claims the first slice of the unit interval.
    pub const ALL: [JackpotTier; 4] = [
        JackpotTier::Mini,
        JackpotTier::Minor,
        JackpotTier::Major,
        JackpotTier::Grand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JackpotTier::Mini => "mini",
            JackpotTier::Minor => "minor",
            JackpotTier::Major => "major",
            JackpotTier::Grand => "grand",
        }
    }

    pub fn from_name(name: &str) -> Option<JackpotTier> {
        match name {
            "mini" => Some(JackpotTier::Mini),
            "minor" => Some(JackpotTier::Minor),
            "major" => Some(JackpotTier::Major),
            "grand" => Some(JackpotTier::Grand),
            _ => None,
        }
    }
}

/// One f64 per tier. Config uses this for seed floors, per-orb trigger
/// rates and per-wager contribution rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierValues {
    pub mini: f64,
    pub minor: f64,
    pub major: f64,
    pub grand: f64,
}

impl TierValues {
    pub fn get(&self, tier: JackpotTier) -> f64 {
        match tier {
            JackpotTier::Mini => self.mini,
            JackpotTier::Minor => self.minor,
            JackpotTier::Major => self.major,
            JackpotTier::Grand => self.grand,
        }
    }

    pub fn set(&mut self, tier: JackpotTier, value: f64) {
        match tier {
            JackpotTier::Mini => self.mini = value,
            JackpotTier::Minor => self.minor = value,
            JackpotTier::Major => self.major = value,
            JackpotTier::Grand => self.grand = value,
        }
    }
}

/// The four progressive pools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JackpotMeters {
    pub mini: f64,
    pub minor: f64,
    pub major: f64,
    pub grand: f64,
}

/// A jackpot claimed during a bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotAward {
    pub tier: JackpotTier,
    pub amount: Credits,
}

impl JackpotMeters {
    /// Fresh meters sitting at the configured floors.
    pub fn seeded(seeds: &TierValues) -> Self {
        Self {
            mini: seeds.mini,
            minor: seeds.minor,
            major: seeds.major,
            grand: seeds.grand,
        }
    }

    pub fn get(&self, tier: JackpotTier) -> f64 {
        match tier {
            JackpotTier::Mini => self.mini,
            JackpotTier::Minor => self.minor,
            JackpotTier::Major => self.major,
            JackpotTier::Grand => self.grand,
        }
    }

    pub fn set(&mut self, tier: JackpotTier, value: f64) {
        match tier {
            JackpotTier::Mini => self.mini = value,
            JackpotTier::Minor => self.minor = value,
            JackpotTier::Major => self.major = value,
            JackpotTier::Grand => self.grand = value,
        }
    }

    /// Every wager feeds every pool, before the reels are drawn.
    pub fn contribute(&mut self, total_bet: Credits, rates: &TierValues) {
        let bet = total_bet as f64;
        self.mini += bet * rates.mini;
        self.minor += bet * rates.minor;
        self.major += bet * rates.major;
        self.grand += bet * rates.grand;
    }

    /// Pay a tier out: returns the current value rounded to whole
    /// credits and reseeds the pool to its floor. A second hit of the
    /// same tier in one bonus pays the reseeded floor.
    pub fn take(&mut self, tier: JackpotTier, seeds: &TierValues) -> Credits {
        let award = self.get(tier).round() as Credits;
        self.set(tier, seeds.get(tier));
        award
    }
}
