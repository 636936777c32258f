//! Schema generation probing and structural error detection.
//!
//! CHANGELOG:
//! - 02/15/2026 - Added table probes and stats
//! - 02/13/2026 - Initial structural error detection

use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

use super::queries;
use crate::error::Result;
use crate::models::{ArchiveStats, SchemaGeneration};

/// Tables that only exist on modern archives.
pub const MODERN_TABLES: [&str; 2] = ["jid_map", "lid_display_name"];

fn structural_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)no such (table|column)").expect("static regex is valid")
    })
}

/// Whether an error means the query does not fit this archive's schema
/// (missing table or column), as opposed to I/O or corruption problems.
pub fn is_structural_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(msg)) => structural_pattern().is_match(msg),
        rusqlite::Error::SqliteFailure(_, None) => false,
        other => structural_pattern().is_match(&other.to_string()),
    }
}

/// Check whether a table exists in the archive.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(queries::TABLE_EXISTS, [table], |row| row.get(0))?;
    Ok(count > 0)
}

/// Detect the schema generation from the presence of the modern tables.
pub fn detect_generation(conn: &Connection) -> Result<SchemaGeneration> {
    for table in MODERN_TABLES {
        if !table_exists(conn, table)? {
            tracing::debug!(table, "modern table missing");
            return Ok(SchemaGeneration::Legacy);
        }
    }
    Ok(SchemaGeneration::Modern)
}

/// Count chats and messages.
pub fn archive_stats(conn: &Connection) -> Result<ArchiveStats> {
    let stats = conn.query_row(queries::ARCHIVE_STATS, [], |row| {
        Ok(ArchiveStats {
            chat_count: row.get(0)?,
            message_count: row.get(1)?,
        })
    })?;
    Ok(stats)
}
