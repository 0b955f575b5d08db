use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::object_type::ObjectType;

pub mod view;

/// Mutation kind reported by the catalog services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Action::Create),
            "UPDATE" => Ok(Action::Update),
            "DELETE" => Ok(Action::Delete),
            other => Err(format!("Unknown action: {other}")),
        }
    }
}

/// One recorded change event: who, what table, which record id, when.
/// Immutable once written; `time` is an RFC 3339 UTC string.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub time: String,
    pub table_name: String,
    pub action: String,
    pub record_id: String,
    pub user_ident: String,
}

pub struct NewAuditEntry {
    pub time: DateTime<Utc>,
    pub table_name: ObjectType,
    pub action: Action,
    pub record_id: String,
    pub user_ident: String,
}

/// Page of audit entries for display.
pub struct AuditPage {
    pub entries: Vec<AuditEntry>,
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<AuditEntry> {
    Ok(AuditEntry {
        id: row.get("id")?,
        time: row.get("time")?,
        table_name: row.get("table_name")?,
        action: row.get("action")?,
        record_id: row.get("record_id")?,
        user_ident: row.get("user_ident")?,
    })
}

/// Insert a change event. Returns the new row id.
pub fn record(conn: &Connection, entry: &NewAuditEntry) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO audit_entries (time, table_name, action, record_id, user_ident) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            // Fixed precision keeps the stored strings ordered lexicographically.
            entry.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.table_name.as_str(),
            entry.action.as_str(),
            entry.record_id,
            entry.user_ident,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find audit entries newest first, with pagination and an optional table filter.
pub fn find_paginated(
    conn: &Connection,
    page: i64,
    per_page: i64,
    table: Option<ObjectType>,
) -> rusqlite::Result<AuditPage> {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);
    let offset = (page - 1) * per_page;

    let mut filters = Vec::new();
    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(t) = table {
        filters.push(format!("table_name = ?{}", params_vec.len() + 1));
        params_vec.push(Box::new(t.as_str().to_string()));
    }

    let filter_clause = if filters.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", filters.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) FROM audit_entries{}", filter_clause);
    let param_refs: Vec<&dyn rusqlite::types::ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();
    let total_count: i64 = conn.query_row(&count_sql, param_refs.as_slice(), |row| row.get(0))?;
    let total_pages = view::total_pages(total_count, per_page);

    let select_sql = format!(
        "SELECT id, time, table_name, action, record_id, user_ident \
         FROM audit_entries{} \
         ORDER BY time DESC, id DESC \
         LIMIT ?{} OFFSET ?{}",
        filter_clause,
        params_vec.len() + 1,
        params_vec.len() + 2
    );

    params_vec.push(Box::new(per_page));
    params_vec.push(Box::new(offset));
    let param_refs: Vec<&dyn rusqlite::types::ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();

    let mut stmt = conn.prepare(&select_sql)?;
    let entries = stmt
        .query_map(param_refs.as_slice(), row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AuditPage {
        entries,
        page,
        per_page,
        total_count,
        total_pages,
    })
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM audit_entries", [], |row| row.get(0))
}

/// Delete entries older than the cutoff. Returns the number of rows removed.
pub fn delete_older_than(conn: &Connection, cutoff: DateTime<Utc>) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM audit_entries WHERE time < ?1",
        params![cutoff.to_rfc3339_opts(SecondsFormat::Secs, true)],
    )
}
