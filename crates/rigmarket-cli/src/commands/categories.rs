// Rust guideline compliant 2026-10-12

//! Implementation of the `rig categories` command.

use crate::{CliContext, OutputFormatter};
use anyhow::Result;

/// Prints the configured category catalog.
///
/// # Errors
///
/// Returns an error if the market is not initialized or its config is invalid.
pub fn execute(context: &CliContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = context.market()?.load_config()?;
    println!("{}", formatter.format_categories(&config.categories));
    Ok(())
}
