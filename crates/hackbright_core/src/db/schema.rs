//! Tracker table bootstrap.
//!
//! # Invariants
//! - Every statement is `IF NOT EXISTS`; existing tables and rows are left as
//!   they are.
//! - `PRAGMA user_version` is neither read nor written; the database may be
//!   shared with other tools that own it.

use super::DbResult;
use log::debug;
use rusqlite::Connection;

const TRACKER_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables the record operations read and write.
pub const TRACKER_TABLES: [&str; 3] = ["students", "projects", "grades"];

/// Creates whichever tracker tables and indexes are missing.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(TRACKER_SCHEMA_SQL)?;
    tx.commit()?;
    debug!("event=schema_ensure module=db status=ok");
    Ok(())
}
