//! Database module for reading exported msgstore archives.
//!
//! Query helpers take `&Connection` so they work both through an
//! [`connection::ArchiveStore`] and on connections owned by the caller.
//!
//! CHANGELOG:
//! - 02/15/2026 - Added schema probing
//! - 02/12/2026 - Initial module structure

pub mod connection;
pub mod conversations;
pub mod helpers;
pub mod messages;
pub mod queries;
pub mod schema;

#[cfg(test)]
pub(crate) mod fixtures;

pub use connection::{ArchiveStore, ReadOptions};
pub use conversations::{list_conversations, DisplayNamePolicy, DEFAULT_CONVERSATION_LIMIT};
pub use messages::{list_messages, DEFAULT_MESSAGE_LIMIT};
