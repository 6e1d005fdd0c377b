//! SQLite observation history implementing the HistoryProvider trait

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::info;
use uksi_core::storage::{HistoryProvider, StoreResult, TaxonKeySet};

use crate::error::{Result, SqliteError};
use crate::migrate::{migrate_observations, table_exists};

/// Observation records read for ranking.
///
/// Expects a `records` table with a nullable `taxon_id` and an ISO-8601
/// `date` column (`YYYY-MM-DD`).
pub struct SqliteHistory {
    conn: Connection,
}

impl SqliteHistory {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory history with an empty records table (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrate_observations(&conn)?;
        Ok(Self::new(conn))
    }

    /// Open the recording application's observations database read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SqliteError::DatabaseMissing(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        if !table_exists(&conn, "records")? {
            return Err(SqliteError::MissingTable {
                path: path.to_path_buf(),
                table: "records",
            });
        }

        info!("Opened observations database: {}", path.display());
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query_keys(&self, sql: &str, params: impl rusqlite::Params) -> Result<TaxonKeySet> {
        let mut stmt = self.conn.prepare(sql)?;
        let keys = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<TaxonKeySet, rusqlite::Error>>()?;
        Ok(keys)
    }
}

impl HistoryProvider for SqliteHistory {
    fn recent_taxa(&self, window_days: u32) -> StoreResult<TaxonKeySet> {
        Ok(self.query_keys(
            "SELECT DISTINCT taxon_id
             FROM records
             WHERE taxon_id IS NOT NULL AND taxon_id != ''
               AND date >= date('now', ?)",
            [format!("-{} days", window_days)],
        )?)
    }

    fn all_recorded_taxa(&self) -> StoreResult<TaxonKeySet> {
        Ok(self.query_keys(
            "SELECT DISTINCT taxon_id
             FROM records
             WHERE taxon_id IS NOT NULL AND taxon_id != ''",
            [],
        )?)
    }
}
