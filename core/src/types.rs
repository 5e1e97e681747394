//! Shared primitive types used across the entire engine.

/// Whole credits, the only denomination the player ever sees.
/// Meters accrue fractionally and round to this at award time.
pub type Credits = u64;

/// Row index into the visible window. 0 = top, 2 = bottom.
pub type Row = usize;

/// Reel (column) index, leftmost reel first.
pub type Reel = usize;
