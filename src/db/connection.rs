//! Archive store handle.
//!
//! An `ArchiveStore` is caller-owned: several archives can be open side by
//! side, and nothing is kept in global state. The connection is opened
//! read-only; this crate never writes to an archive.
//!
//! CHANGELOG:
//! - 02/15/2026 - Async load, blob spill via tempfile
//! - 02/12/2026 - Initial implementation

use rusqlite::{Connection, OpenFlags};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::conversations::{list_conversations, DisplayNamePolicy};
use super::messages::list_messages;
use super::schema::{archive_stats, detect_generation};
use crate::error::{ArchiveError, Result};
use crate::media::MediaLabels;
use crate::models::{ArchiveStats, Conversation, Message, SchemaGeneration};

/// Every SQLite database file starts with this header.
pub const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

/// Options applied to every query on a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub labels: MediaLabels,
    pub display_names: DisplayNamePolicy,
}

/// An opened, read-only chat archive.
pub struct ArchiveStore {
    conn: Connection,
    options: ReadOptions,
    // Backing file for archives loaded from memory; removed on drop
    _spill: Option<NamedTempFile>,
}

impl std::fmt::Debug for ArchiveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveStore")
            .field("path", &self.conn.path())
            .field("options", &self.options)
            .finish()
    }
}

impl ArchiveStore {
    /// Open an archive file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = open_read_only(path)?;
        tracing::debug!(?path, "opened archive");
        Ok(Self::from_connection(conn))
    }

    /// Initialize from the raw bytes of an exported archive.
    ///
    /// SQLite needs a file to read from, so the bytes are written to a private
    /// temporary file that lives as long as the store.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !bytes.starts_with(SQLITE_HEADER) {
            return Err(ArchiveError::NotAnArchive { len: bytes.len() });
        }

        let mut spill = NamedTempFile::new()?;
        spill.write_all(bytes)?;
        spill.flush()?;

        let conn = open_read_only(spill.path())?;
        tracing::debug!(len = bytes.len(), path = ?spill.path(), "loaded archive from memory");
        Ok(Self {
            conn,
            options: ReadOptions::default(),
            _spill: Some(spill),
        })
    }

    /// Asynchronous initialization: runs [`ArchiveStore::from_bytes`] on the
    /// blocking pool. No retries.
    pub async fn load(bytes: Vec<u8>) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::from_bytes(&bytes))
            .await
            .map_err(|e| ArchiveError::Init(e.to_string()))?
    }

    /// Read the archive file asynchronously, then initialize from its bytes.
    pub async fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        Self::load(bytes).await
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            options: ReadOptions::default(),
            _spill: None,
        }
    }

    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Conversations, newest first. Fails only when no known schema fits.
    pub fn conversations(&self, limit: u32) -> Result<Vec<Conversation>> {
        list_conversations(&self.conn, limit, &self.options.display_names)
    }

    /// Messages of one conversation, oldest first. Empty on any failure.
    pub fn messages(&self, chat_id: i64, limit: u32) -> Vec<Message> {
        list_messages(&self.conn, chat_id, limit, &self.options.labels)
    }

    pub fn stats(&self) -> Result<ArchiveStats> {
        archive_stats(&self.conn)
    }

    pub fn schema_generation(&self) -> Result<SchemaGeneration> {
        detect_generation(&self.conn)
    }
}

fn open_read_only(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })
}
