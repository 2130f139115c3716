// Rust guideline compliant 2026-10-12

//! Implementation of the `rig delete` command.
//!
//! Soft-deletes a listing: it leaves the public feed but stays in the store
//! until the sweep purges it at `deleted_at`.

use crate::context::resolve_id;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;

/// Deactivates a listing owned by the acting user.
///
/// Deleting an already inactive listing succeeds without changes.
///
/// # Errors
///
/// Returns an error if:
/// - `--user` is missing
/// - The listing is not found or not owned by the acting user
pub fn execute(context: &CliContext, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let requester = context.identity()?;
    let market = context.open()?;

    let full_id = resolve_id(&market, &id)?;
    market.soft_delete(&full_id, &requester)?;
    println!("{}", formatter.format_ack("deleted", &full_id));

    Ok(())
}
