//! Reading commands: conversations, messages.
//!
//! CHANGELOG:
//! - 02/16/2026 - Initial implementation

use anyhow::{Context, Result};

use crate::models::{Conversation, Message};
use crate::output::OutputControls;
use crate::session::ArchiveSession;

/// List conversations, newest first.
pub fn conversations(session: &ArchiveSession, limit: u32, output: &OutputControls) -> Result<()> {
    let conversations = session
        .conversations(limit)
        .context("Failed to list conversations")?;

    if output.json {
        output.print(&conversations);
        return Ok(());
    }

    if conversations.is_empty() {
        println!("No conversations found.");
        return Ok(());
    }

    println!("Conversations ({}):", conversations.len());
    println!("{}", "-".repeat(60));
    for conversation in &conversations {
        println!("{}", conversation_line(conversation));
    }
    Ok(())
}

/// List one conversation's messages, oldest first.
pub fn messages(
    session: &ArchiveSession,
    chat_id: i64,
    limit: u32,
    output: &OutputControls,
) -> Result<()> {
    let messages = session.messages(chat_id, limit);

    if output.json {
        output.print(&messages);
        return Ok(());
    }

    if messages.is_empty() {
        println!("No messages found for conversation {}.", chat_id);
        return Ok(());
    }

    println!("Conversation {} ({} messages):", chat_id, messages.len());
    println!("{}", "-".repeat(60));
    for message in &messages {
        println!("{}", message_line(message));
    }
    Ok(())
}

fn conversation_line(conversation: &Conversation) -> String {
    let name = match &conversation.display_name {
        Some(name) => format!("{} ({})", name, conversation.identity),
        None => conversation.identity.clone(),
    };
    format!(
        "[{:>6}] {}  {}",
        conversation.id,
        conversation.last_activity.format("%Y-%m-%d %H:%M"),
        name
    )
}

fn message_line(message: &Message) -> String {
    let sender = if message.outgoing { "Me" } else { "Them" };
    let mut line = format!(
        "[{}] {}:",
        message.timestamp.format("%Y-%m-%d %H:%M:%S"),
        sender
    );

    if let Some(quoted) = &message.quoted_text {
        let preview: String = quoted.chars().take(40).collect();
        line.push_str(&format!(" > \"{}\"", preview));
    }
    if let Some(media) = &message.media {
        line.push_str(&format!(" [{}: {}]", media.label, media.file_name));
    }
    if let Some(text) = &message.text {
        line.push(' ');
        line.push_str(text);
    }
    line
}
