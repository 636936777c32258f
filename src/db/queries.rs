//! SQL queries for exported msgstore archives.
//!
//! Both conversation queries return the same column shape so one row mapper
//! serves every schema generation:
//!
//! | idx | column            |
//! |-----|-------------------|
//! | 0   | chat id           |
//! | 1   | phone JID user    |
//! | 2   | raw JID user      |
//! | 3   | subject           |
//! | 4   | cached name       |
//! | 5   | sort timestamp    |
//!
//! CHANGELOG:
//! - 02/15/2026 - Added stats and schema probe queries
//! - 02/12/2026 - Initial query constants

/// Conversations on modern archives.
///
/// Resolves LID-only chats to their phone JID through `jid_map` and picks up
/// the cached `lid_display_name`. Parameters: ?1 = limit
pub const CONVERSATIONS_MAPPED: &str = r#"
SELECT
    chat._id,
    jid_phone.user AS phone_user,
    jid.user AS raw_user,
    chat.subject,
    lid_display_name.display_name,
    chat.sort_timestamp
FROM chat
LEFT JOIN jid ON chat.jid_row_id = jid._id
LEFT JOIN jid_map ON jid_map.lid_row_id = jid._id
LEFT JOIN jid AS jid_phone ON jid_phone._id = jid_map.jid_row_id
LEFT JOIN lid_display_name ON lid_display_name.lid_row_id = jid._id
ORDER BY chat.sort_timestamp DESC
LIMIT ?1
"#;

/// Conversations on legacy archives without `jid_map`/`lid_display_name`.
/// Parameters: ?1 = limit
pub const CONVERSATIONS_LEGACY: &str = r#"
SELECT
    chat._id,
    NULL AS phone_user,
    jid.user AS raw_user,
    chat.subject,
    NULL AS display_name,
    chat.sort_timestamp
FROM chat
LEFT JOIN jid ON chat.jid_row_id = jid._id
ORDER BY chat.sort_timestamp DESC
LIMIT ?1
"#;

/// Messages of one chat, newest first.
///
/// At most one `message_media` row is joined per message. The caller reverses
/// the result for display. Parameters: ?1 = chat id, ?2 = limit
pub const MESSAGES_BY_CHAT: &str = r#"
SELECT
    message._id,
    message.from_me,
    message.text_data,
    message.timestamp,
    message.message_type,
    (SELECT message_quoted.text_data
     FROM message_quoted
     WHERE message_quoted.message_row_id = message._id
     LIMIT 1) AS quoted_text,
    message_media.media_name,
    message_media.file_path,
    message_media.mime_type
FROM message
LEFT JOIN message_media ON message_media.rowid = (
    SELECT mm.rowid FROM message_media mm
    WHERE mm.message_row_id = message._id
    LIMIT 1
)
WHERE message.chat_row_id = ?1
ORDER BY message.sort_id DESC
LIMIT ?2
"#;

/// Row counts for `chat` and `message`.
pub const ARCHIVE_STATS: &str = r#"
SELECT
    (SELECT COUNT(*) FROM chat) AS chat_count,
    (SELECT COUNT(*) FROM message) AS message_count
"#;

/// Whether a table exists. Parameters: ?1 = table name
pub const TABLE_EXISTS: &str = r#"
SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1
"#;
