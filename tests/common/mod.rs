//! Shared test infrastructure for model layer tests.
//!
//! `setup_test_db()` creates a temporary SQLite database with the full schema
//! applied. The returned TempDir must be kept alive for the Connection to
//! remain valid.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tempfile::TempDir;

use endringslogg::db::MIGRATIONS;
use endringslogg::models::audit::{self, Action, NewAuditEntry};
use endringslogg::models::object_type::ObjectType;

#[allow(dead_code)]
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// Record one audit entry at the given timestamp.
#[allow(dead_code)]
pub fn record_at(
    conn: &Connection,
    time: DateTime<Utc>,
    table: ObjectType,
    action: Action,
    record_id: &str,
    user: &str,
) -> i64 {
    audit::record(
        conn,
        &NewAuditEntry {
            time,
            table_name: table,
            action,
            record_id: record_id.to_string(),
            user_ident: user.to_string(),
        },
    )
    .expect("Failed to record audit entry")
}
