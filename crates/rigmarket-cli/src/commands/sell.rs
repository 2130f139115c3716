// Rust guideline compliant 2026-10-12

//! Implementation of the `rig sell` command.

use crate::context::resolve_id;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;

/// Marks a listing sold. Only the owner may do this, and only once.
///
/// # Errors
///
/// Returns an error if:
/// - `--user` is missing
/// - The listing is not found or not owned by the acting user
/// - The listing is already sold
pub fn execute(context: &CliContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let requester = context.identity()?;
    let market = context.open()?;

    let full_id = resolve_id(&market, &id)?;
    let listing = market.mark_sold(&full_id, &requester)?;
    println!("{}", formatter.format_listing(&listing, listing.updated_at));

    Ok(())
}
