//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database, and the engine never
//! touches the store at all. The caller runs spins, then records what
//! it wants to keep: meters, the latest outcome, a bounded history
//! log, and session scalars.

use crate::{
    engine::SpinOutcome,
    error::SlotResult,
    jackpot::{JackpotMeters, JackpotTier},
    snapshot::SlotSnapshot,
};
use rusqlite::{params, Connection, OptionalExtension};

/// Newest entries kept in the spin log; older rows are pruned.
pub const SPIN_LOG_CAP: usize = 20;

/// One line of the bounded spin history.
#[derive(Debug, Clone)]
pub struct SpinLogEntry {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub created_at: String,
}

pub struct SlotStore {
    conn: Connection,
}

impl SlotStore {
    /// Open (or create) the session database at `path`.
    pub fn open(path: &str) -> SlotResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SlotResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SlotResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Jackpot meters ─────────────────────────────────────────

    pub fn save_meters(&self, meters: &JackpotMeters) -> SlotResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        for tier in JackpotTier::ALL {
            self.conn.execute(
                "INSERT INTO jackpot_meter (tier, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(tier) DO UPDATE SET
                     value = excluded.value, updated_at = excluded.updated_at",
                params![tier.name(), meters.get(tier), now],
            )?;
        }
        Ok(())
    }

    /// None until a session has seeded all four pools.
    pub fn load_meters(&self) -> SlotResult<Option<JackpotMeters>> {
        let mut stmt = self.conn.prepare("SELECT tier, value FROM jackpot_meter")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut meters = JackpotMeters {
            mini: 0.0,
            minor: 0.0,
            major: 0.0,
            grand: 0.0,
        };
        let mut found = 0;
        for row in rows {
            let (name, value) = row?;
            if let Some(tier) = JackpotTier::from_name(&name) {
                meters.set(tier, value);
                found += 1;
            }
        }
        if found < JackpotTier::ALL.len() {
            if found > 0 {
                log::warn!("ignoring partial meter state: {found} of 4 pools persisted");
            }
            return Ok(None);
        }
        Ok(Some(meters))
    }

    // ── Last outcome ───────────────────────────────────────────

    /// Persist the latest outcome, unseen. The caller marks it seen
    /// once the reveal has actually been shown.
    pub fn save_outcome(&self, outcome: &SpinOutcome) -> SlotResult<()> {
        let json = serde_json::to_string(outcome)?;
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO outcome_snapshot (id, outcome_json, seen, updated_at)
             VALUES (1, ?1, 0, ?2)
             ON CONFLICT(id) DO UPDATE SET
                 outcome_json = excluded.outcome_json, seen = 0,
                 updated_at = excluded.updated_at",
            params![json, now],
        )?;
        Ok(())
    }

    pub fn mark_outcome_seen(&self) -> SlotResult<()> {
        self.conn
            .execute("UPDATE outcome_snapshot SET seen = 1 WHERE id = 1", [])?;
        Ok(())
    }

    /// The latest outcome and whether the player has seen it.
    pub fn load_outcome(&self) -> SlotResult<Option<(SpinOutcome, bool)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT outcome_json, seen FROM outcome_snapshot WHERE id = 1")?;
        let row = stmt
            .query_row([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .optional()?;
        match row {
            Some((json, seen)) => {
                let outcome: SpinOutcome = serde_json::from_str(&json)?;
                Ok(Some((outcome, seen != 0)))
            }
            None => Ok(None),
        }
    }

    // ── Spin log ───────────────────────────────────────────────

    /// Append one line and prune the log to its cap.
    pub fn append_log(&self, kind: &str, message: &str) -> SlotResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO spin_log (kind, message, created_at) VALUES (?1, ?2, ?3)",
            params![kind, message, now],
        )?;
        self.conn.execute(
            "DELETE FROM spin_log WHERE id NOT IN
                 (SELECT id FROM spin_log ORDER BY id DESC LIMIT ?1)",
            params![SPIN_LOG_CAP as i64],
        )?;
        Ok(())
    }

    /// Newest entries first.
    pub fn recent_log(&self, limit: usize) -> SlotResult<Vec<SpinLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, message, created_at FROM spin_log
             ORDER BY id DESC LIMIT ?1",
        )?;
        let entries = stmt
            .query_map(params![limit as i64], |row| {
                Ok(SpinLogEntry {
                    id:         row.get(0)?,
                    kind:       row.get(1)?,
                    message:    row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    // ── Session scalars ────────────────────────────────────────

    pub fn save_session_value(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO session (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn load_session_value(&self, key: &str) -> SlotResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM session WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    // ── Snapshot ───────────────────────────────────────────────

    /// Assemble the persisted session, if one exists.
    pub fn load_snapshot(&self) -> SlotResult<Option<SlotSnapshot>> {
        let meters = match self.load_meters()? {
            Some(meters) => meters,
            None => return Ok(None),
        };
        let (last_outcome, outcome_seen) = match self.load_outcome()? {
            Some((outcome, seen)) => (Some(outcome), seen),
            None => (None, true),
        };
        Ok(Some(SlotSnapshot {
            meters,
            last_outcome,
            outcome_seen,
        }))
    }
}
