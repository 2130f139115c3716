// Rust guideline compliant 2026-10-12

//! Implementation of the `rig view` command.

use crate::context::resolve_id;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;

/// Counts one view of a listing.
///
/// A failed increment is logged and reported as not counted, never as an error.
///
/// # Errors
///
/// Returns an error if the market is not initialized or the ID cannot be resolved.
pub fn execute(context: &CliContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let market = context.open()?;
    let full_id = resolve_id(&market, &id)?;

    let views = market.increment_view(&full_id);
    println!("{}", formatter.format_views(&full_id, views));

    Ok(())
}
