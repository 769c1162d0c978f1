//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::Result;
use contact_book::{Assistant, Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        "Configuration loaded successfully"
    );

    let mut session = Session::new(Assistant::new(config.birthday_window_days));
    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        error!("Session aborted: {:#}", e);
        return Err(e);
    }

    Ok(())
}
