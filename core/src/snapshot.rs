//! Session snapshot — everything a front end persists between spins.
//!
//! The seen flag covers crash recovery: an outcome is saved unseen
//! before the reveal animation plays and flipped once the player has
//! watched it, so a killed session replays its last result on resume
//! instead of dropping a win.

use crate::{engine::SpinOutcome, jackpot::JackpotMeters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub meters: JackpotMeters,
    pub last_outcome: Option<SpinOutcome>,
    pub outcome_seen: bool,
}

impl SlotSnapshot {
    /// A brand-new session: seeded meters, nothing to replay.
    pub fn fresh(meters: JackpotMeters) -> Self {
        Self {
            meters,
            last_outcome: None,
            outcome_seen: true,
        }
    }
}
