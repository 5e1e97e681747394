//! The visible reel window.

use crate::{
    rng::SpinRng,
    symbols::Symbol,
    types::{Reel, Row},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows in the visible window.
pub const ROWS: usize = 3;

/// A 3×N window cut from the strips. Row-major; serializes as the
/// bare cell array so front ends can persist and replay it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Draw one uniform stop per reel, leftmost reel first. Draw
    /// order is part of the replay contract.
    pub fn draw_stops(rng: &mut SpinRng, strips: &[Vec<Symbol>]) -> Vec<usize> {
        strips.iter().map(|strip| rng.next_index(strip.len())).collect()
    }

    /// Cut the window: row 1 shows the stop itself, rows 0 and 2 its
    /// wrapped neighbours above and below.
    pub fn from_stops(strips: &[Vec<Symbol>], stops: &[usize]) -> Self {
        debug_assert_eq!(strips.len(), stops.len());

        let mut cells = vec![vec![Symbol::A; strips.len()]; ROWS];
        for (reel, strip) in strips.iter().enumerate() {
            let len = strip.len();
            let mid = stops[reel] % len;
            cells[0][reel] = strip[(mid + len - 1) % len];
            cells[1][reel] = strip[mid];
            cells[2][reel] = strip[(mid + 1) % len];
        }
        Self { cells }
    }

    /// Build a window from explicit rows. Used when replaying a
    /// persisted grid and by tests that stage exact layouts.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        debug_assert_eq!(rows.len(), ROWS);
        Self { cells: rows }
    }

    pub fn at(&self, row: Row, reel: Reel) -> Symbol {
        self.cells[row][reel]
    }

    pub(crate) fn set(&mut self, row: Row, reel: Reel, symbol: Symbol) {
        self.cells[row][reel] = symbol;
    }

    pub fn reel_count(&self) -> usize {
        self.cells[0].len()
    }

    /// Count a symbol anywhere in the window.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == symbol)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{:>6}", symbol.label())?;
            }
        }
        Ok(())
    }
}
