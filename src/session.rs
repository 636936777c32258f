//! Session holding an archive that may not be loaded yet.
//!
//! Hosts that start listing before the user picked an archive get empty
//! results instead of errors: "nothing loaded" and "nothing there" look the
//! same to them.
//!
//! CHANGELOG:
//! - 02/16/2026 - Initial implementation

use crate::db::{ArchiveStore, ReadOptions};
use crate::error::Result;
use crate::models::{Conversation, Message};

#[derive(Debug, Default)]
pub struct ArchiveSession {
    store: Option<ArchiveStore>,
    options: ReadOptions,
}

impl ArchiveSession {
    pub fn new(options: ReadOptions) -> Self {
        Self {
            store: None,
            options,
        }
    }

    /// Load an archive blob, replacing any previously loaded archive.
    pub async fn initialize(&mut self, bytes: Vec<u8>) -> Result<()> {
        let store = ArchiveStore::load(bytes).await?;
        self.attach(store);
        Ok(())
    }

    /// Use an already opened store. Session options take precedence.
    pub fn attach(&mut self, store: ArchiveStore) {
        if self.store.is_some() {
            tracing::debug!("replacing loaded archive");
        }
        self.store = Some(store.with_options(self.options.clone()));
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&ArchiveStore> {
        self.store.as_ref()
    }

    pub fn conversations(&self, limit: u32) -> Result<Vec<Conversation>> {
        match &self.store {
            Some(store) => store.conversations(limit),
            None => {
                tracing::debug!("conversations requested before archive was loaded");
                Ok(Vec::new())
            }
        }
    }

    pub fn messages(&self, chat_id: i64, limit: u32) -> Vec<Message> {
        match &self.store {
            Some(store) => store.messages(chat_id, limit),
            None => {
                tracing::debug!(chat_id, "messages requested before archive was loaded");
                Vec::new()
            }
        }
    }
}
