//! The payout engine. One spin resolves completely, synchronously,
//! before anything animates.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Clamp the wager and feed every jackpot pool.
//!   2. Draw one stop per reel, left to right.
//!   3. Cut the window and inject orbs.
//!   4. Score paylines and scatter on the post-injection window.
//!   5. Run hold-and-spin when enough orbs landed.
//!
//! RULES:
//!   - All randomness flows through the SpinRng the caller hands in.
//!   - Meter state is explicit: passed in, returned on the outcome.
//!   - The engine performs no I/O and owns no timers.

use crate::{
    bonus::{run_hold_and_spin, BonusOutcome},
    config::SlotConfig,
    error::SlotResult,
    grid::Grid,
    jackpot::JackpotMeters,
    orbs::inject_orbs,
    paylines::{evaluate_paylines, scatter_win, LineWin},
    rng::SpinRng,
    types::Credits,
};
use serde::{Deserialize, Serialize};

/// Everything one spin resolved to. Immutable once returned; the
/// caller persists `meters_after` and feeds it into the next spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub reel_stops: Vec<usize>,
    pub grid: Grid,
    pub line_wins: Vec<LineWin>,
    pub scatter_count: usize,
    pub scatter_win: Credits,
    pub orb_count: usize,
    pub bonus_triggered: bool,
    pub bonus: Option<BonusOutcome>,
    pub bet_per_line: Credits,
    pub total_bet: Credits,
    pub total_win: Credits,
    pub meters_after: JackpotMeters,
}

impl SpinOutcome {
    pub fn win_class(&self) -> WinClass {
        WinClass::classify(self.total_win, self.total_bet)
    }
}

/// Win size relative to the wager. Display metadata only; no payout
/// effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinClass {
    None,
    Small,
    Big,
    Mega,
}

impl WinClass {
    pub fn classify(total_win: Credits, total_bet: Credits) -> Self {
        if total_win >= total_bet * 20 {
            WinClass::Mega
        } else if total_win >= total_bet * 10 {
            WinClass::Big
        } else if total_win > 0 {
            WinClass::Small
        } else {
            WinClass::None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WinClass::None => "none",
            WinClass::Small => "small",
            WinClass::Big => "big",
            WinClass::Mega => "mega",
        }
    }
}

pub struct SlotEngine {
    config: SlotConfig,
}

impl SlotEngine {
    /// Build an engine over a validated model. Any configuration
    /// error refuses construction.
    pub fn new(config: SlotConfig) -> SlotResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine over the shipped math model.
    pub fn standard() -> SlotResult<Self> {
        Self::new(SlotConfig::standard())
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Meters sitting at the configured floors.
    pub fn fresh_meters(&self) -> JackpotMeters {
        JackpotMeters::seeded(&self.config.jackpot_seeds)
    }

    /// Resolve one spin. The wager is clamped into the configured
    /// bounds, never rejected — a spin must not silently lose a bet.
    pub fn spin(
        &self,
        rng: &mut SpinRng,
        meters: &JackpotMeters,
        bet_per_line: Credits,
    ) -> SpinOutcome {
        let config = &self.config;
        let bet = config.clamp_bet(bet_per_line);
        let total_bet = config.total_bet(bet);

        // Pools grow on every wager, before the reels are drawn, so a
        // bonus on this very spin already sees the contribution.
        let mut meters_after = *meters;
        meters_after.contribute(total_bet, &config.contribution_rates);

        let reel_stops = Grid::draw_stops(rng, &config.strips);
        let base_grid = Grid::from_stops(&config.strips, &reel_stops);
        let (grid, orb_count) = inject_orbs(&base_grid, rng, config, bet);

        let line_wins = evaluate_paylines(&grid, config, bet);
        let (scatter_count, scatter_amount) = scatter_win(&grid, config, total_bet);
        let line_total: Credits = line_wins.iter().map(|win| win.payout).sum();
        let mut total_win = line_total + scatter_amount;

        let bonus_triggered = orb_count >= config.orb_trigger_count;
        let bonus = if bonus_triggered {
            let resolved = run_hold_and_spin(rng, &grid, meters_after, config, bet);
            total_win += resolved.total_win;
            meters_after = resolved.meters_after;
            Some(resolved)
        } else {
            None
        };

        log::debug!(
            "spin: bet {bet}x{}, {} line win(s), scatter {scatter_amount}, \
             orbs {orb_count}, total {total_win}",
            config.line_count(),
            line_wins.len(),
        );

        SpinOutcome {
            reel_stops,
            grid,
            line_wins,
            scatter_count,
            scatter_win: scatter_amount,
            orb_count,
            bonus_triggered,
            bonus,
            bet_per_line: bet,
            total_bet,
            total_win,
            meters_after,
        }
    }
}

/// Settle a wallet after a spin: stake out, winnings in, floored at
/// zero whole credits.
pub fn settle_credits(credits: Credits, total_bet: Credits, total_win: Credits) -> Credits {
    (credits + total_win).saturating_sub(total_bet)
}

/// A spin may start only when the stake is covered.
pub fn can_afford(credits: Credits, total_bet: Credits) -> bool {
    credits >= total_bet
}
