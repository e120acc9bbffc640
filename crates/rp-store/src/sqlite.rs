//! SQLite store (feature `sqlite`).
//!
//! A single `plans` table.  The schedule lives in the `document` column as
//! the same JSON document the other backends store; `name` and
//! `duration_days` are duplicated into columns so listings skip the parse.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use rp_core::PlanId;
use rp_schedule::ReadingPlan;

use crate::store::{self, PlanStore, PlanSummary};
use crate::StoreResult;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A private in-memory database.
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS plans (
                 id            INTEGER PRIMARY KEY AUTOINCREMENT,
                 name          TEXT    NOT NULL,
                 duration_days INTEGER NOT NULL,
                 document      TEXT    NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

impl PlanStore for SqliteStore {
    fn insert(&mut self, plan: &ReadingPlan) -> StoreResult<PlanId> {
        let document = store::encode(plan)?;
        self.conn.execute(
            "INSERT INTO plans (name, duration_days, document) VALUES (?1, ?2, ?3)",
            rusqlite::params![plan.name, plan.duration_days, document],
        )?;
        let id = PlanId(self.conn.last_insert_rowid() as u64);
        info!(%id, plan = %plan.name, "stored plan in SQLite");
        Ok(id)
    }

    fn get(&self, id: PlanId) -> StoreResult<Option<ReadingPlan>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM plans WHERE id = ?1",
                [id.0 as i64],
                |row| row.get(0),
            )
            .optional()?;
        document.map(|doc| store::decode(id, &doc)).transpose()
    }

    fn delete(&mut self, id: PlanId) -> StoreResult<bool> {
        let n = self.conn.execute("DELETE FROM plans WHERE id = ?1", [id.0 as i64])?;
        Ok(n > 0)
    }

    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, duration_days FROM plans ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(PlanSummary {
                id:            PlanId(row.get::<_, i64>(0)? as u64),
                name:          row.get(1)?,
                duration_days: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
