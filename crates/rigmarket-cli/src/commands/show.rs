// Rust guideline compliant 2026-10-12

//! Implementation of the `rig show` command.
//!
//! Displays one listing, supporting both full and partial ID resolution.

use crate::context::resolve_id;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;
use rigmarket_core::{Clock, SystemClock};

/// Shows details of a listing by ID.
///
/// Inactive and sold listings are shown; listings due for purge are not.
///
/// # Errors
///
/// Returns an error if:
/// - The market is not initialized
/// - The ID is too short, ambiguous or not found
pub fn execute(context: &CliContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let market = context.open()?;
    let full_id = resolve_id(&market, &id)?;
    let listing = market.get_listing(&full_id)?;

    println!("{}", formatter.format_listing(&listing, SystemClock.now()));

    Ok(())
}
