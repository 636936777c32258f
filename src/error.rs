//! Error types for archive access.
//!
//! CHANGELOG:
//! - 02/12/2026 - Initial error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the archive reader.
///
/// Message listing never surfaces these; it degrades to an empty list.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive file could not be opened.
    #[error("Failed to open archive at {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// The blob handed to initialization is not an SQLite database.
    #[error("Input is not an SQLite database ({len} bytes)")]
    NotAnArchive { len: usize },

    /// Spilling the archive blob to a temporary file failed.
    #[error("I/O error preparing archive: {0}")]
    Io(#[from] std::io::Error),

    /// A query failed for a reason other than a missing table or column.
    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// Neither the mapped nor the legacy conversation query runs on this archive.
    #[error(
        "Failed to query conversations. Database schema might be incompatible \
         (mapped query: {mapped}; legacy query: {legacy})"
    )]
    SchemaIncompatible { mapped: String, legacy: String },

    /// The background initialization task did not complete.
    #[error("Archive initialization failed: {0}")]
    Init(String),
}

/// Convenience alias for `Result<T, ArchiveError>`.
pub type Result<T> = std::result::Result<T, ArchiveError>;
