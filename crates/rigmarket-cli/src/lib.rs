// Rust guideline compliant 2026-10-12

//! Rigmarket CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

pub use context::CliContext;
pub use logging::{init_tracing, parse_log_level, LogOptions};
pub use output::{create_formatter, OutputFormatter};
