use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Reel {reel} strip has {len} symbols, window needs at least {min}")]
    StripTooShort { reel: usize, len: usize, min: usize },

    #[error("Reel {reel} strip carries an orb; orbs enter only by injection")]
    OrbOnStrip { reel: usize },

    #[error("Payline {line} spans {len} reels, expected {expected}")]
    PaylineLengthMismatch {
        line: usize,
        len: usize,
        expected: usize,
    },

    #[error("Payline {line} references row {row}, window has {rows} rows")]
    PaylineRowOutOfRange { line: usize, row: usize, rows: usize },

    #[error("No paytable entry for payable symbol '{symbol}'")]
    PaytableGap { symbol: String },

    #[error("Orb cash table is empty or its weights sum to zero")]
    EmptyOrbTable,

    #[error("Jackpot floor for '{tier}' must be positive, got {value}")]
    NonPositiveJackpotFloor { tier: &'static str, value: f64 },

    #[error("Bet bounds inverted: min {min} > max {max}")]
    BetBoundsInverted { min: u64, max: u64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SlotResult<T> = Result<T, SlotError>;
