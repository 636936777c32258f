//! Archive info commands: stats, schema.
//!
//! CHANGELOG:
//! - 02/16/2026 - Initial implementation

use anyhow::{Context, Result};
use serde_json::json;

use crate::db::ArchiveStore;
use crate::output::OutputControls;

/// Print chat and message counts.
pub fn stats(store: &ArchiveStore, output: &OutputControls) -> Result<()> {
    let stats = store.stats().context("Failed to count archive rows")?;

    if output.json {
        output.print(&stats);
    } else {
        println!("Chats:    {}", stats.chat_count);
        println!("Messages: {}", stats.message_count);
    }
    Ok(())
}

/// Print the detected schema generation.
pub fn schema(store: &ArchiveStore, output: &OutputControls) -> Result<()> {
    let generation = store
        .schema_generation()
        .context("Failed to inspect archive schema")?;

    if output.json {
        output.print(&json!({ "generation": generation }));
    } else {
        println!("Schema generation: {}", generation);
    }
    Ok(())
}
