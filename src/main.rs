//! wa-archive - read exported WhatsApp chat archives from the terminal.
//!
//! CHANGELOG:
//! - 02/16/2026 - Initial CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use wa_archive::commands;
use wa_archive::config::Config;
use wa_archive::output::{self, OutputControls};
use wa_archive::{ArchiveSession, ArchiveStore};

/// Read conversations and messages from an exported msgstore archive.
#[derive(Parser, Debug)]
#[command(name = "wa-archive")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the archive (msgstore.db)
    archive: String,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist (dotted paths allowed, e.g. media.kind)
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Config file (defaults to $WA_ARCHIVE_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List conversations, newest first
    Conversations {
        /// Max conversations (default from config, 1000)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List messages of a conversation, oldest first
    Messages {
        /// Conversation id (from `conversations`)
        chat_id: i64,

        /// Max messages, newest kept (default from config, 5000)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show chat and message counts
    Stats,

    /// Show which schema generation the archive uses
    Schema,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref().map(expand);
    let config = Config::load_or_default(config_path.as_deref())?;

    let output_controls = OutputControls {
        json: cli.json || cli.compact || cli.fields.is_some(),
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let archive_path = expand(&cli.archive);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start runtime")?;

    let bytes = std::fs::read(&archive_path)
        .with_context(|| format!("Failed to read archive {:?}", archive_path))?;
    let mut session = ArchiveSession::new(config.read_options());
    runtime
        .block_on(session.initialize(bytes))
        .with_context(|| format!("Failed to load archive {:?}", archive_path))?;

    match cli.command {
        Command::Conversations { limit } => commands::reading::conversations(
            &session,
            limit.unwrap_or(config.conversation_limit),
            &output_controls,
        ),
        Command::Messages { chat_id, limit } => commands::reading::messages(
            &session,
            chat_id,
            limit.unwrap_or(config.message_limit),
            &output_controls,
        ),
        Command::Stats => commands::info::stats(loaded_store(&session)?, &output_controls),
        Command::Schema => commands::info::schema(loaded_store(&session)?, &output_controls),
    }
}

fn loaded_store(session: &ArchiveSession) -> Result<&ArchiveStore> {
    session.store().context("Archive was not loaded")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
