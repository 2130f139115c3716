// Rust guideline compliant 2026-10-12

//! Tracing subscriber setup for the CLI.

use anyhow::{bail, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging options taken from the global CLI flags.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Level name: error, warn, info or debug.
    pub log_level: String,
    /// Append JSON logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Installs the global JSON tracing subscriber.
///
/// Logs go to stderr unless a log file is configured, in which case they are
/// written by a background worker that flushes when the returned guard drops.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&options.log_level)?;

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info and debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {}", other),
    }
}
