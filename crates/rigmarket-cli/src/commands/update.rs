// Rust guideline compliant 2026-10-12

//! Implementation of the `rig update` command.
//!
//! Applies an owner's partial edit. Lifecycle flags and timestamps are not
//! editable here; use `rig sell` and `rig delete`.

use super::{parse_condition, parse_optional_decimal};
use crate::context::resolve_id;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;
use clap::Args;
use rigmarket_core::ListingPatch;

/// Arguments for `rig update`.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Listing ID (full or partial)
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New brand
    #[arg(long)]
    pub brand: Option<String>,

    /// New model
    #[arg(long)]
    pub model: Option<String>,

    /// New condition
    #[arg(long)]
    pub condition: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,

    /// Replace the image list
    #[arg(long, value_delimiter = ',')]
    pub image: Vec<String>,
}

impl UpdateArgs {
    fn to_patch(&self) -> rigmarket_app::Result<ListingPatch> {
        Ok(ListingPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            condition: parse_condition(self.condition.as_deref())?,
            price: parse_optional_decimal("price", self.price.as_deref())?,
            location: self.location.clone(),
            images: if self.image.is_empty() {
                None
            } else {
                Some(self.image.clone())
            },
        })
    }
}

/// Updates a listing owned by the acting user.
///
/// # Errors
///
/// Returns an error if:
/// - `--user` is missing
/// - The listing is not found or not owned by the acting user
/// - A field fails validation
pub fn execute(context: &CliContext, args: UpdateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let requester = context.identity()?;
    let patch = args.to_patch()?;
    let market = context.open()?;

    let full_id = resolve_id(&market, &args.id)?;
    let listing = market.update_listing(&full_id, &requester, &patch)?;
    println!("{}", formatter.format_listing(&listing, listing.updated_at));

    Ok(())
}
