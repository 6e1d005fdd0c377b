//! Schema bootstrap for fresh databases
//!
//! Embeds the schema SQL files and applies them once each, tracked in a
//! `schema_migrations` table. Used for in-memory databases in tests and for
//! creating empty databases; existing UKSI extracts are opened as they are.

use rusqlite::Connection;

use crate::error::{Result, SqliteError};

/// Reference dataset schema: taxa, common names, synonyms, hierarchy
const REFERENCE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "000",
        include_str!("../migrations/000_create_schema_migrations.sql"),
    ),
    (
        "001",
        include_str!("../migrations/001_create_uksi_tables.sql"),
    ),
];

/// Observation history schema: the records table read by ranking
const OBSERVATION_MIGRATIONS: &[(&str, &str)] = &[
    (
        "000",
        include_str!("../migrations/000_create_schema_migrations.sql"),
    ),
    (
        "002",
        include_str!("../migrations/002_create_records_table.sql"),
    ),
];

/// Apply the reference dataset schema.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub fn migrate_reference(conn: &Connection) -> Result<()> {
    apply_all(conn, REFERENCE_MIGRATIONS)
}

/// Apply the observation history schema.
pub fn migrate_observations(conn: &Connection) -> Result<()> {
    apply_all(conn, OBSERVATION_MIGRATIONS)
}

fn apply_all(conn: &Connection, migrations: &[(&str, &str)]) -> Result<()> {
    for (version, sql) in migrations {
        apply_migration(conn, version, sql)
            .map_err(|e| SqliteError::Migration(format!("{}: {}", version, e)))?;
    }
    Ok(())
}

/// Apply a single migration if it hasn't been applied yet
fn apply_migration(conn: &Connection, version: &str, sql: &str) -> Result<()> {
    if is_migration_applied(conn, version)? {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    record_migration(&tx, version)?;
    tx.commit()?;

    Ok(())
}

/// Check if a migration has already been applied
fn is_migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    if !table_exists(conn, "schema_migrations")? {
        return Ok(false);
    }

    let exists = conn
        .prepare("SELECT 1 FROM schema_migrations WHERE version = ?")?
        .exists([version])?;

    Ok(exists)
}

/// Record that a migration has been applied
fn record_migration(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version, applied_at) VALUES (?, CURRENT_TIMESTAMP)",
        [version],
    )?;
    Ok(())
}

/// Check whether a table exists in the main schema
pub(crate) fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")?
        .exists([table])?;
    Ok(exists)
}
