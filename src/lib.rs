//! wa-archive library
//!
//! Reads exported WhatsApp `msgstore` SQLite archives into typed records:
//! conversations, their messages, and attachment classification. Tolerates
//! both legacy (`chat` + `jid`) and modern (LID mapping) schemas.
//!
//! CHANGELOG:
//! - 02/16/2026 - Session wrapper and config
//! - 02/11/2026 - Initial library structure

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod media;
pub mod models;
pub mod output;
pub mod session;

pub use db::{ArchiveStore, DisplayNamePolicy, ReadOptions};
pub use error::{ArchiveError, Result};
pub use media::{LabelLocale, MediaLabels};
pub use models::{ArchiveStats, Conversation, MediaAttachment, MediaKind, Message, SchemaGeneration};
pub use session::ArchiveSession;
