//! Per-conversation message listing.
//!
//! Read failures here never propagate: a conversation that cannot be read
//! shows up as empty so browsing other conversations still works.
//!
//! CHANGELOG:
//! - 02/14/2026 - Media classification via rule chain
//! - 02/12/2026 - Initial implementation

use rusqlite::{params, Connection, Row};

use super::helpers::{int_at, millis_to_datetime, text_at};
use super::queries;
use crate::media::classify::is_legacy_media_type;
use crate::media::{basename, classify, resolve_mime, MediaFacts, MediaLabels};
use crate::models::{MediaAttachment, Message, UNKNOWN_FILE_NAME};

pub const DEFAULT_MESSAGE_LIMIT: u32 = 5000;

/// Raw columns of `MESSAGES_BY_CHAT`, already trimmed.
#[derive(Debug)]
struct MessageRow {
    id: i64,
    from_me: Option<i64>,
    text: Option<String>,
    timestamp: Option<i64>,
    message_type: Option<i64>,
    quoted_text: Option<String>,
    media_name: Option<String>,
    file_path: Option<String>,
    mime_type: Option<String>,
}

impl MessageRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            from_me: int_at(row, 1)?,
            text: text_at(row, 2)?,
            timestamp: int_at(row, 3)?,
            message_type: int_at(row, 4)?,
            quoted_text: text_at(row, 5)?,
            media_name: text_at(row, 6)?,
            file_path: text_at(row, 7)?,
            mime_type: text_at(row, 8)?,
        })
    }

    fn has_media_metadata(&self) -> bool {
        self.media_name.is_some() || self.file_path.is_some() || self.mime_type.is_some()
    }

    fn attachment(&self, labels: &MediaLabels) -> Option<MediaAttachment> {
        if !self.has_media_metadata() && !is_legacy_media_type(self.message_type) {
            return None;
        }

        let file_path = self.file_path.as_deref();
        let file_name = self
            .media_name
            .clone()
            .or_else(|| basename(file_path).map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_FILE_NAME.to_string());

        let mime = resolve_mime(self.mime_type.as_deref(), Some(&file_name), file_path);
        let classification = classify(
            &MediaFacts {
                mime: &mime,
                file_name: Some(&file_name),
                file_path,
                message_type: self.message_type,
            },
            labels,
        );

        Some(MediaAttachment {
            file_name,
            file_path: self.file_path.clone(),
            mime_type: classification.mime,
            kind: classification.kind,
            label: classification.label,
        })
    }

    fn into_message(self, labels: &MediaLabels) -> Message {
        let media = self.attachment(labels);
        Message {
            id: self.id,
            outgoing: self.from_me == Some(1),
            text: self.text,
            timestamp: millis_to_datetime(self.timestamp.unwrap_or(0)),
            quoted_text: self.quoted_text,
            media,
        }
    }
}

/// List a conversation's messages, oldest first, at most `limit` of them.
///
/// The newest `limit` messages are selected. Any failure yields an empty list.
pub fn list_messages(
    conn: &Connection,
    chat_id: i64,
    limit: u32,
    labels: &MediaLabels,
) -> Vec<Message> {
    match try_list_messages(conn, chat_id, limit, labels) {
        Ok(messages) => {
            tracing::debug!(chat_id, count = messages.len(), "listed messages");
            messages
        }
        Err(err) => {
            tracing::warn!(chat_id, error = %err, "failed to list messages");
            Vec::new()
        }
    }
}

/// Same as [`list_messages`] but surfaces the query error.
pub fn try_list_messages(
    conn: &Connection,
    chat_id: i64,
    limit: u32,
    labels: &MediaLabels,
) -> rusqlite::Result<Vec<Message>> {
    let mut stmt = conn.prepare(queries::MESSAGES_BY_CHAT)?;
    let rows = stmt.query_map(params![chat_id, i64::from(limit)], MessageRow::from_row)?;

    let mut messages = Vec::new();
    for row in rows {
        messages.push(row?.into_message(labels));
    }

    // Query runs newest first so the limit keeps the latest messages
    messages.reverse();
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;
    use crate::media::UNKNOWN_MIME;
    use crate::models::MediaKind;

    fn english() -> MediaLabels {
        MediaLabels::english()
    }

    #[test]
    fn test_chronological_order() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());
        let ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
        // Ordered by sort_id, not _id
        assert_eq!(ids, vec![10, 11, 12, 13, 14, 9]);
        assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_limit_keeps_latest() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, 2, &english());
        let ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![14, 9]);
    }

    #[test]
    fn test_text_and_quotes() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());

        let greeting = &messages[0];
        assert_eq!(greeting.text.as_deref(), Some("Olá"));
        assert!(!greeting.outgoing);
        assert!(!greeting.has_media());
        assert_eq!(greeting.timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let reply = &messages[4];
        assert!(reply.outgoing);
        assert_eq!(reply.quoted_text.as_deref(), Some("Olá"));
        assert!(reply.media.is_none());
    }

    #[test]
    fn test_explicit_media_metadata() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());

        let photo = messages[1].media.as_ref().unwrap();
        assert_eq!(photo.file_name, "IMG-0001.jpg");
        assert_eq!(photo.file_path.as_deref(), Some("Media/WhatsApp Images/IMG-0001.jpg"));
        assert_eq!(photo.mime_type, "image/jpeg");
        assert_eq!(photo.kind, MediaKind::Image);
        assert_eq!(photo.label, "Image");
    }

    #[test]
    fn test_legacy_type_without_metadata() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());

        let voice = &messages[2];
        assert_eq!(voice.text, None);
        let media = voice.media.as_ref().unwrap();
        assert_eq!(media.kind, MediaKind::Audio);
        assert_eq!(media.file_name, UNKNOWN_FILE_NAME);
        assert_eq!(media.file_path, None);
        assert_eq!(media.mime_type, UNKNOWN_MIME);
    }

    #[test]
    fn test_sticker_from_path() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());

        let sticker = &messages[3];
        assert_eq!(sticker.text, None);
        let media = sticker.media.as_ref().unwrap();
        assert_eq!(media.file_name, "abc.webp");
        assert_eq!(media.mime_type, "image/webp");
        assert_eq!(media.kind, MediaKind::Sticker);
    }

    #[test]
    fn test_mime_inferred_from_name() {
        let conn = fixtures::modern_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &MediaLabels::portuguese());

        let doc = messages[5].media.as_ref().unwrap();
        assert_eq!(doc.file_name, "report.PDF");
        assert_eq!(doc.mime_type, "application/pdf");
        assert_eq!(doc.kind, MediaKind::Document);
        assert_eq!(doc.label, "Documento");
    }

    #[test]
    fn test_legacy_archive_messages() {
        let conn = fixtures::legacy_archive();
        let messages = list_messages(&conn, 1, DEFAULT_MESSAGE_LIMIT, &english());
        assert_eq!(messages.len(), 2);
        assert!(!messages[0].has_media());
        assert_eq!(messages[1].media.as_ref().unwrap().kind, MediaKind::Video);
    }

    #[test]
    fn test_unknown_chat_is_empty() {
        let conn = fixtures::modern_archive();
        assert!(list_messages(&conn, 404, DEFAULT_MESSAGE_LIMIT, &english()).is_empty());
    }

    #[test]
    fn test_query_failure_degrades_to_empty() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(try_list_messages(&conn, 1, 10, &english()).is_err());
        assert!(list_messages(&conn, 1, 10, &english()).is_empty());
    }
}
