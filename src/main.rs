//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_assistant::{
    run_session, AddressBook, AssistantBot, Config, ContactRepository, ContactService,
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if !config.color {
        colored::control::set_override(false);
    }

    info!(
        today = %config.today(),
        birthday_window_days = config.birthday_window_days,
        "Configuration loaded"
    );

    let mut bot = AssistantBot::new(ContactService::new(AddressBook::new()), config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut bot, stdin.lock(), &mut stdout)?;

    info!(contacts = bot.service().repository().len(), "Contact Assistant shutdown complete");
    Ok(())
}
