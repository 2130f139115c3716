// Rust guideline compliant 2026-10-12

//! Implementation of the `rig init` command.
//!
//! Creates the `.rigmarket` directory with an empty listing file and a
//! default configuration. Running it again leaves existing files untouched.

use crate::{CliContext, OutputFormatter};
use anyhow::Result;
use rigmarket_app::MarketContext;

/// Initializes a market directory under the context root.
///
/// # Errors
///
/// Returns an error if the directory or its files cannot be created.
pub fn execute(context: &CliContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let market = MarketContext::init(context.root.as_deref())?;
    let config = market.load_config()?;

    tracing::info!(path = %market.market_dir().display(), "market initialized");
    println!(
        "{}",
        formatter.format_init(market.market_dir(), config.categories.len())
    );

    Ok(())
}
