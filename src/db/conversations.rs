//! Conversation listing with schema fallback.
//!
//! Queries are tried from the richest schema generation down. A missing table
//! or column moves on to the next query; any other failure is returned as is.
//! When the last query fails too, both failures are reported together.
//!
//! CHANGELOG:
//! - 02/16/2026 - Display name masking moved out of SQL, configurable markers
//! - 02/13/2026 - Versioned strategy list, structural-only fallback
//! - 02/12/2026 - Initial implementation

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use super::helpers::{int_at, millis_to_datetime, text_at};
use super::queries;
use super::schema::is_structural_error;
use crate::error::{ArchiveError, Result};
use crate::models::{Conversation, SchemaGeneration, UNKNOWN_IDENTITY};

pub const DEFAULT_CONVERSATION_LIMIT: u32 = 1000;

/// Redaction glyph (U+2219) used in masked cached names such as `+55∙∙∙1234`.
pub const DEFAULT_MASKING_MARKER: &str = "\u{2219}";

/// Conversation queries, richest schema first.
const STRATEGIES: &[(SchemaGeneration, &str)] = &[
    (SchemaGeneration::Modern, queries::CONVERSATIONS_MAPPED),
    (SchemaGeneration::Legacy, queries::CONVERSATIONS_LEGACY),
];

/// Decides which name a conversation is shown under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNamePolicy {
    /// A cached display name containing any of these is treated as masked.
    pub masking_markers: Vec<String>,
}

impl Default for DisplayNamePolicy {
    fn default() -> Self {
        Self {
            masking_markers: vec![DEFAULT_MASKING_MARKER.to_string()],
        }
    }
}

impl DisplayNamePolicy {
    pub fn is_masked(&self, name: &str) -> bool {
        self.masking_markers
            .iter()
            .any(|marker| !marker.is_empty() && name.contains(marker.as_str()))
    }

    /// Subject first, then the cached name unless it looks masked.
    pub fn resolve(&self, subject: Option<String>, cached_name: Option<String>) -> Option<String> {
        subject.or_else(|| cached_name.filter(|name| !self.is_masked(name)))
    }
}

/// List conversations, newest first, at most `limit` of them.
pub fn list_conversations(
    conn: &Connection,
    limit: u32,
    policy: &DisplayNamePolicy,
) -> Result<Vec<Conversation>> {
    let mut failures: Vec<String> = Vec::new();

    for (idx, (generation, sql)) in STRATEGIES.iter().enumerate() {
        match run_query(conn, sql, limit, policy) {
            Ok(conversations) => {
                tracing::debug!(
                    %generation,
                    count = conversations.len(),
                    "conversation query succeeded"
                );
                return Ok(conversations);
            }
            Err(err) => {
                let is_last = idx + 1 == STRATEGIES.len();
                if !is_last && !is_structural_error(&err) {
                    return Err(ArchiveError::Query(err));
                }
                tracing::warn!(%generation, error = %err, "conversation query failed");
                failures.push(err.to_string());
            }
        }
    }

    let mut failures = failures.into_iter();
    let mapped = failures.next().unwrap_or_default();
    let legacy = failures.next().unwrap_or_default();
    tracing::error!(%mapped, %legacy, "archive schema is incompatible");
    Err(ArchiveError::SchemaIncompatible { mapped, legacy })
}

fn run_query(
    conn: &Connection,
    sql: &str,
    limit: u32,
    policy: &DisplayNamePolicy,
) -> rusqlite::Result<Vec<Conversation>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([i64::from(limit)], |row| map_row(row, policy))?;
    let conversations = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(conversations)
}

fn map_row(row: &Row<'_>, policy: &DisplayNamePolicy) -> rusqlite::Result<Conversation> {
    let id: i64 = row.get(0)?;
    let phone_user = text_at(row, 1)?;
    let raw_user = text_at(row, 2)?;
    let subject = text_at(row, 3)?;
    let cached_name = text_at(row, 4)?;
    let sort_timestamp = int_at(row, 5)?.unwrap_or(0);

    Ok(Conversation {
        id,
        identity: phone_user
            .or(raw_user)
            .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string()),
        display_name: policy.resolve(subject, cached_name),
        last_activity: millis_to_datetime(sort_timestamp),
        sort_timestamp,
    })
}
