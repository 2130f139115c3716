// Rust guideline compliant 2026-10-12

//! Implementation of the `rig list` command.
//!
//! Runs a discovery query: facet filters, free-text search that may resolve
//! to a category, sort order and pagination.

use super::parse_optional_decimal;
use crate::{CliContext, OutputFormatter};
use anyhow::Result;
use clap::Args;
use rigmarket_app::ListOptions;
use rigmarket_core::{Clock, SystemClock};

/// Arguments for `rig list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Free-text search; a category token (e.g. GPU) selects that category
    pub search: Option<String>,

    /// Filter by category slug
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by brand substring
    #[arg(long)]
    pub brand: Option<String>,

    /// Filter by condition: new, used or refurbished
    #[arg(long)]
    pub condition: Option<String>,

    /// Minimum price, inclusive
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price, inclusive
    #[arg(long)]
    pub max_price: Option<String>,

    /// Filter by location substring
    #[arg(long)]
    pub location: Option<String>,

    /// Filter by seller ID
    #[arg(long, conflicts_with = "mine")]
    pub seller: Option<String>,

    /// Only the acting user's listings
    #[arg(long)]
    pub mine: bool,

    /// List sold, deactivated or expired listings instead of the public feed
    #[arg(long)]
    pub inactive: bool,

    /// Sort order: newest, oldest, price-low, price-high
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<usize>,

    /// Page size
    #[arg(long)]
    pub limit: Option<usize>,
}

impl ListArgs {
    fn into_options(self, context: &CliContext) -> rigmarket_app::Result<ListOptions> {
        let seller_id = if self.mine {
            Some(context.identity()?.id)
        } else {
            self.seller
        };

        Ok(ListOptions {
            min_price: parse_optional_decimal("min_price", self.min_price.as_deref())?,
            max_price: parse_optional_decimal("max_price", self.max_price.as_deref())?,
            category: self.category,
            brand: self.brand,
            condition: self.condition,
            location: self.location,
            search: self.search,
            seller_id,
            active: if self.inactive { Some(false) } else { None },
            sort: self.sort,
            page: self.page,
            limit: self.limit,
        })
    }
}

/// Lists listings matching the given facets.
///
/// # Errors
///
/// Returns an error if:
/// - The market is not initialized
/// - `--mine` is given without `--user`
/// - A facet value is invalid
pub fn execute(context: &CliContext, args: ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let options = args.into_options(context)?;
    let market = context.open()?;

    let page = market.list_listings(&options)?;
    println!("{}", formatter.format_page(&page, SystemClock.now()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine_uses_identity() {
        let context = CliContext {
            user: Some("user-bob".to_string()),
            ..CliContext::default()
        };
        let args = ListArgs {
            mine: true,
            ..ListArgs::default()
        };
        let options = args.into_options(&context).unwrap();
        assert_eq!(options.seller_id.as_deref(), Some("user-bob"));
    }

    #[test]
    fn test_inactive_and_prices() {
        let args = ListArgs {
            inactive: true,
            min_price: Some("10".to_string()),
            max_price: Some("99.50".to_string()),
            ..ListArgs::default()
        };
        let options = args.into_options(&CliContext::default()).unwrap();
        assert_eq!(options.active, Some(false));
        assert_eq!(options.min_price, Some(rust_decimal::Decimal::from(10)));
        assert_eq!(options.max_price, Some(rust_decimal::Decimal::new(9950, 2)));
    }
}
