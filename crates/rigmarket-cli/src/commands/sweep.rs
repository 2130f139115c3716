// Rust guideline compliant 2026-10-12

//! Implementation of the `rig sweep` command.
//!
//! Runs one expiry and purge pass immediately, as the scheduler would.

use crate::{CliContext, OutputFormatter};
use anyhow::Result;

/// Runs a single sweep and prints its report.
///
/// # Errors
///
/// Returns an error if the market is not initialized or the store fails.
pub fn execute(context: &CliContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let market = context.open()?;
    let report = market.sweep_now()?;
    println!("{}", formatter.format_sweep(&report));
    Ok(())
}
