// Rust guideline compliant 2026-10-12

//! Implementation of the `rig serve` command.
//!
//! Runs the periodic sweep in the foreground until interrupted.

use crate::CliContext;
use anyhow::Result;

/// Starts the sweep scheduler and blocks until Ctrl-C.
///
/// The first sweep runs immediately; later sweeps follow the configured
/// `sweep_interval_secs`.
///
/// # Errors
///
/// Returns an error if the market cannot be opened, the runtime cannot be
/// built or the signal handler cannot be installed.
pub fn execute(context: &CliContext) -> Result<()> {
    let market = context.open()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let handle = market.spawn_sweeper();
        tracing::info!(
            interval_secs = market.config().sweep_interval_secs,
            "sweep scheduler started"
        );

        let result = tokio::signal::ctrl_c().await;
        tracing::info!("shutting down");
        handle.shutdown().await;
        result?;
        Ok::<(), anyhow::Error>(())
    })
}
