// Rust guideline compliant 2026-10-12

//! Implementation of the `rig create` command.
//!
//! Publishes a new listing owned by the acting user.

use super::{parse_condition, parse_optional_decimal};
use crate::{CliContext, OutputFormatter};
use anyhow::Result;
use clap::Args;
use rigmarket_core::NewListing;

/// Arguments for `rig create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Title of the listing
    pub title: String,

    /// Category slug (e.g. gpu, cpu)
    #[arg(long)]
    pub category: String,

    /// Asking price
    #[arg(long)]
    pub price: Option<String>,

    /// Condition: new, used or refurbished
    #[arg(long)]
    pub condition: Option<String>,

    /// Pickup or shipping location
    #[arg(long)]
    pub location: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Manufacturer brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Manufacturer model
    #[arg(long)]
    pub model: Option<String>,

    /// Image references
    #[arg(long, value_delimiter = ',')]
    pub image: Vec<String>,

    /// Promote the listing ahead of others
    #[arg(long)]
    pub boosted: bool,
}

impl CreateArgs {
    fn into_new_listing(self) -> rigmarket_app::Result<NewListing> {
        Ok(NewListing {
            price: parse_optional_decimal("price", self.price.as_deref())?,
            condition: parse_condition(self.condition.as_deref())?,
            title: self.title,
            description: self.description.unwrap_or_default(),
            category: self.category,
            brand: self.brand.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            images: self.image,
            is_boosted: self.boosted,
        })
    }
}

/// Creates a listing for the acting user.
///
/// # Errors
///
/// Returns an error if:
/// - `--user` is missing
/// - The market is not initialized
/// - A field fails validation or the category is unknown
/// - The listing cannot be stored
pub fn execute(
    context: &CliContext,
    args: CreateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let seller = context.identity()?;
    let input = args.into_new_listing()?;
    let market = context.open()?;

    let listing = market.create_listing(&seller, input)?;
    println!("{}", formatter.format_listing(&listing, listing.created_at));

    Ok(())
}
