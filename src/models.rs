//! Read-only records produced from an archive.
//!
//! Records are projections rebuilt on every query; nothing here is written
//! back to the archive.
//!
//! CHANGELOG:
//! - 02/15/2026 - Added ArchiveStats and SchemaGeneration
//! - 02/11/2026 - Initial models

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identity used when neither a phone number nor a raw JID user is known.
pub const UNKNOWN_IDENTITY: &str = "Unknown";

/// File name used for attachments that carry neither a name nor a path.
pub const UNKNOWN_FILE_NAME: &str = "unknown-file";

/// A chat (individual or group) from the `chat` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversation {
    /// `chat._id`, used to list the conversation's messages.
    pub id: i64,
    /// Phone-like identity. Never empty.
    pub identity: String,
    pub display_name: Option<String>,
    pub last_activity: DateTime<Utc>,
    /// Raw `chat.sort_timestamp` the listing is ordered by.
    pub sort_timestamp: i64,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: i64,
    pub outgoing: bool,
    pub text: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub quoted_text: Option<String>,
    /// Present exactly when the message carries an attachment.
    pub media: Option<MediaAttachment>,
}

impl Message {
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}

/// Attachment metadata. All fields are populated together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAttachment {
    /// Explicit name, else basename of the path, else `unknown-file`.
    pub file_name: String,
    /// Path inside the exported media folder. Old archives that only carry a
    /// message type code have none.
    pub file_path: Option<String>,
    pub mime_type: String,
    pub kind: MediaKind,
    pub label: String,
}

/// Semantic attachment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
    Sticker,
    Unknown,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
            MediaKind::Sticker => "sticker",
            MediaKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which generation of the chat schema an archive uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaGeneration {
    /// `chat` + `jid` only.
    Legacy,
    /// Adds `jid_map` (LID to phone JID) and `lid_display_name`.
    Modern,
}

impl fmt::Display for SchemaGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaGeneration::Legacy => f.write_str("legacy"),
            SchemaGeneration::Modern => f.write_str("modern"),
        }
    }
}

/// Row counts of the main tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub chat_count: i64,
    pub message_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MediaKind::Sticker).unwrap();
        assert_eq!(json, "\"sticker\"");
        assert_eq!(MediaKind::Document.to_string(), "document");
    }

    #[test]
    fn test_message_without_media_serializes_null() {
        let msg = Message {
            id: 1,
            outgoing: false,
            text: Some("oi".to_string()),
            timestamp: DateTime::<Utc>::default(),
            quoted_text: None,
            media: None,
        };
        assert!(!msg.has_media());
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value["media"].is_null());
    }
}
