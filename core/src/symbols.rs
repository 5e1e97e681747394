//! The symbol vocabulary for reel strips, paylines and the paytable.
//!
//! RULE: Orb never appears on a strip. It enters the grid only through
//! injection, so strip validation rejects it outright.

use serde::{Deserialize, Serialize};

/// Everything that can occupy a grid cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Symbol {
    A,
    K,
    Q,
    J,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "9")]
    Nine,
    Cryo,
    Helix,
    Virus,
    Core,
    Wild,
    Scatter,
    Orb,
}

/// Payout role of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Low,
    High,
    Wild,
    Scatter,
    Orb,
}

impl Symbol {
    pub const ALL: [Symbol; 13] = [
        Symbol::A,
        Symbol::K,
        Symbol::Q,
        Symbol::J,
        Symbol::Ten,
        Symbol::Nine,
        Symbol::Cryo,
        Symbol::Helix,
        Symbol::Virus,
        Symbol::Core,
        Symbol::Wild,
        Symbol::Scatter,
        Symbol::Orb,
    ];

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::A | Symbol::K | Symbol::Q | Symbol::J | Symbol::Ten | Symbol::Nine => {
                SymbolKind::Low
            }
            Symbol::Cryo | Symbol::Helix | Symbol::Virus | Symbol::Core => SymbolKind::High,
            Symbol::Wild => SymbolKind::Wild,
            Symbol::Scatter => SymbolKind::Scatter,
            Symbol::Orb => SymbolKind::Orb,
        }
    }

    /// True for symbols a payline run can be built from. Scatter pays
    /// anywhere and Orb feeds the bonus; neither participates in runs.
    pub fn pays_on_lines(&self) -> bool {
        !matches!(self.kind(), SymbolKind::Scatter | SymbolKind::Orb)
    }

    /// Display label shown on the reel face.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::K => "K",
            Symbol::Q => "Q",
            Symbol::J => "J",
            Symbol::Ten => "10",
            Symbol::Nine => "9",
            Symbol::Cryo => "CRYO",
            Symbol::Helix => "HELIX",
            Symbol::Virus => "VIRUS",
            Symbol::Core => "CORE",
            Symbol::Wild => "WILD",
            Symbol::Scatter => "SCAT",
            Symbol::Orb => "ORB",
        }
    }

    /// Display color (hex) for front ends. Payout logic never reads it.
    pub fn color(&self) -> &'static str {
        match self {
            Symbol::A => "#7df7ff",
            Symbol::K => "#9dffb8",
            Symbol::Q => "#b6c7ff",
            Symbol::J => "#ffd28f",
            Symbol::Ten => "#f4ff9d",
            Symbol::Nine => "#c5f1ff",
            Symbol::Cryo => "#57e3ff",
            Symbol::Helix => "#39ff14",
            Symbol::Virus => "#ff6f6f",
            Symbol::Core => "#ffbd4a",
            Symbol::Wild => "#ffffff",
            Symbol::Scatter => "#ff4dff",
            Symbol::Orb => "#00ffff",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
