//! In-memory archives for tests, one per schema generation.

use rusqlite::Connection;

const BASE_SCHEMA: &str = r#"
CREATE TABLE jid (_id INTEGER PRIMARY KEY, user TEXT, server TEXT);
CREATE TABLE chat (_id INTEGER PRIMARY KEY, jid_row_id INTEGER, subject TEXT, sort_timestamp INTEGER);
CREATE TABLE message (
    _id INTEGER PRIMARY KEY,
    chat_row_id INTEGER,
    from_me INTEGER,
    text_data TEXT,
    timestamp INTEGER,
    message_type INTEGER,
    sort_id INTEGER
);
CREATE TABLE message_media (message_row_id INTEGER PRIMARY KEY, media_name TEXT, file_path TEXT, mime_type TEXT);
CREATE TABLE message_quoted (message_row_id INTEGER PRIMARY KEY, text_data TEXT);
"#;

const MODERN_SCHEMA: &str = r#"
CREATE TABLE jid_map (lid_row_id INTEGER PRIMARY KEY, jid_row_id INTEGER);
CREATE TABLE lid_display_name (lid_row_id INTEGER PRIMARY KEY, display_name TEXT);
"#;

/// Modern archive.
///
/// Chats, newest first: 4 (group "Família"), 2 (LID mapped to a phone, cached
/// name), 1 (plain phone JID), 3 (LID with masked cached name), 5 (dangling JID,
/// blank subject, NULL timestamp). All six messages belong to chat 1; message 9
/// sorts last despite its low id.
pub fn modern_archive() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(BASE_SCHEMA).unwrap();
    conn.execute_batch(MODERN_SCHEMA).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO jid VALUES (1, '5511999990001', 's.whatsapp.net');
        INSERT INTO jid VALUES (2, '123456789012345', 'lid');
        INSERT INTO jid VALUES (3, '5511988887777', 's.whatsapp.net');
        INSERT INTO jid VALUES (4, '98765', 'lid');
        INSERT INTO jid VALUES (5, '120363000000', 'g.us');

        INSERT INTO jid_map VALUES (2, 3);
        INSERT INTO lid_display_name VALUES (2, 'Maria Souza');
        INSERT INTO lid_display_name VALUES (4, '+55∙∙∙1234');

        INSERT INTO chat VALUES (1, 1, NULL, 1704067200000);
        INSERT INTO chat VALUES (2, 2, NULL, 1704153600000);
        INSERT INTO chat VALUES (3, 4, NULL, 1703980800000);
        INSERT INTO chat VALUES (4, 5, 'Família', 1704240000000);
        INSERT INTO chat VALUES (5, 99, '  ', NULL);

        INSERT INTO message VALUES (10, 1, 0, ' Olá ', 1704067200000, 0, 1);
        INSERT INTO message VALUES (11, 1, 1, 'Foto', 1704067260000, 1, 2);
        INSERT INTO message VALUES (12, 1, 0, NULL, 1704067320000, 2, 3);
        INSERT INTO message VALUES (13, 1, 0, '  ', 1704067380000, 20, 4);
        INSERT INTO message VALUES (14, 1, 1, 'respondendo', 1704067440000, 0, 5);
        INSERT INTO message VALUES (9, 1, 0, 'segue o doc', 1704067500000, 9, 6);

        INSERT INTO message_media VALUES (11, 'IMG-0001.jpg', 'Media/WhatsApp Images/IMG-0001.jpg', 'image/jpeg');
        INSERT INTO message_media VALUES (13, NULL, 'Media/WhatsApp Stickers/abc.webp', 'image/webp');
        INSERT INTO message_media VALUES (9, 'report.PDF', NULL, NULL);

        INSERT INTO message_quoted VALUES (14, 'Olá');
        "#,
    )
    .unwrap();
    conn
}

/// Legacy archive: no `jid_map` or `lid_display_name`.
pub fn legacy_archive() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(BASE_SCHEMA).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO jid VALUES (1, '5511999990001', 's.whatsapp.net');
        INSERT INTO jid VALUES (2, '120363000000', 'g.us');

        INSERT INTO chat VALUES (1, 1, NULL, 1704067200000);
        INSERT INTO chat VALUES (2, 2, 'Grupo', 1704153600000);

        INSERT INTO message VALUES (1, 1, 0, 'oi', 1704067200000, 0, 1);
        INSERT INTO message VALUES (2, 1, 1, NULL, 1704067260000, 3, 2);
        "#,
    )
    .unwrap();
    conn
}
