//! helixspin-core: the payout engine behind the slot minigame.
//!
//! Given a wager, the engine deterministically draws a reel window,
//! injects orbs, scores every payline and the scatter condition,
//! resolves the hold-and-spin bonus with its progressive jackpots,
//! and returns one immutable outcome plus the post-spin meter state.
//! Presentation, timing and storage belong to the caller; a SQLite
//! store is provided for callers that want one.

pub mod bonus;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod jackpot;
pub mod orbs;
pub mod paylines;
pub mod rng;
pub mod simulate;
pub mod snapshot;
pub mod store;
pub mod symbols;
pub mod types;
