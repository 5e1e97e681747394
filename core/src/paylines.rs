//! Line and scatter evaluation.

use crate::{config::SlotConfig, grid::Grid, symbols::Symbol, types::Credits};
use serde::{Deserialize, Serialize};

/// One winning payline in a spin outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    pub line_index: usize,
    pub symbol: Symbol,
    pub count: usize,
    pub payout: Credits,
}

/// Walk one line left to right and resolve its run. Wilds extend any
/// run and may lead it; the first non-wild commits the match; Scatter
/// and Orb break immediately. An unbroken all-wild line resolves as
/// Wild itself.
fn resolve_run(symbols: &[Symbol]) -> Option<(Symbol, usize)> {
    let mut matched: Option<Symbol> = None;
    let mut count = 0usize;

    for &symbol in symbols {
        match symbol {
            Symbol::Scatter | Symbol::Orb => break,
            Symbol::Wild => count += 1,
            other => match matched {
                None => {
                    matched = Some(other);
                    count += 1;
                }
                Some(m) if m == other => count += 1,
                Some(_) => break,
            },
        }
    }

    match matched {
        Some(symbol) => Some((symbol, count)),
        None if count > 0 => Some((Symbol::Wild, count)),
        None => None,
    }
}

/// Score every configured payline on the post-injection window.
pub fn evaluate_paylines(grid: &Grid, config: &SlotConfig, bet_per_line: Credits) -> Vec<LineWin> {
    let mut wins = Vec::new();
    for (line_index, line) in config.paylines.iter().enumerate() {
        let symbols: Vec<Symbol> = line
            .iter()
            .enumerate()
            .map(|(reel, &row)| grid.at(row, reel))
            .collect();

        let (symbol, count) = match resolve_run(&symbols) {
            Some(run) => run,
            None => continue,
        };
        if count < 3 {
            continue;
        }
        let unit = config
            .line_pays
            .get(&symbol)
            .map(|pay| pay.for_run(count))
            .unwrap_or(0.0);
        if unit <= 0.0 {
            continue;
        }

        wins.push(LineWin {
            line_index,
            symbol,
            count,
            payout: (unit * bet_per_line as f64).round() as Credits,
        });
    }
    wins
}

/// Scatter pays anywhere on the window, scaled by the total bet.
/// Counts below 3 (or above the table) pay nothing.
pub fn scatter_win(grid: &Grid, config: &SlotConfig, total_bet: Credits) -> (usize, Credits) {
    let count = grid.count(Symbol::Scatter);
    if count < 3 {
        return (count, 0);
    }
    let unit = config.scatter_pays.get(&count).copied().unwrap_or(0.0);
    (count, (unit * total_bet as f64).round() as Credits)
}
