//! Contact Assistant - Main entry point
//!
//! This is the main executable for the contact assistant, a blocking
//! read-eval-print loop over stdin/stdout around an in-memory address book.

use anyhow::Result;
use contact_assistant::{AddressBook, Config, Repl};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting the conversation on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    // The book lives for the whole session and is owned here, not global.
    let mut book = AddressBook::new();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut repl = Repl::new(stdin, stdout, config.prompt);

    info!("Starting session");
    repl.run(&mut book)?;

    info!("Session ended");
    Ok(())
}
