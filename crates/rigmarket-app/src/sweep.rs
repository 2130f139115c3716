// Rust guideline compliant 2026-10-12

//! Time-based listing transitions.
//!
//! A sweep reads `now` once, deactivates listings past `expires_at`, then
//! purges listings past `deleted_at`. Sweeps are idempotent, so a failed sweep
//! is simply logged and left for the next tick.

use crate::events::{EventKind, EventSink, ListingEvent};
use crate::error::Result;
use rigmarket_core::{Clock, ListingState, ListingStore};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Outcome of one sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// The single timestamp every predicate in the sweep used.
    pub now: i64,
    /// IDs deactivated because they expired.
    pub deactivated: Vec<String>,
    /// IDs permanently removed.
    pub purged: Vec<String>,
}

/// Runs sweeps against a store.
pub struct Sweeper {
    store: Arc<dyn ListingStore>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventSink>,
}

impl Sweeper {
    /// Creates a sweeper.
    pub fn new(
        store: Arc<dyn ListingStore>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            clock,
            events,
        }
    }

    /// Runs one sweep.
    ///
    /// # Errors
    ///
    /// Returns the store error if either phase fails. Deactivations committed
    /// before a purge failure stay committed.
    pub fn run_once(&self) -> Result<SweepReport> {
        let now = self.clock.now();

        let deactivated = self.store.deactivate_expired(now)?;
        for id in &deactivated {
            self.events.emit(ListingEvent::new(
                id.clone(),
                EventKind::Expired,
                ListingState::Expired,
                now,
            ));
        }

        let purged = self.store.purge_due(now)?;
        for id in &purged {
            self.events.emit(ListingEvent::new(
                id.clone(),
                EventKind::Purged,
                ListingState::Purged,
                now,
            ));
        }

        Ok(SweepReport {
            now,
            deactivated,
            purged,
        })
    }

    /// Runs one sweep and logs the outcome instead of returning an error.
    pub fn tick(&self) -> Option<SweepReport> {
        match self.run_once() {
            Ok(report) => {
                tracing::info!(
                    now = report.now,
                    deactivated = report.deactivated.len(),
                    purged = report.purged.len(),
                    "sweep complete"
                );
                Some(report)
            }
            Err(e) => {
                tracing::error!(error = %e, "sweep failed, retrying next tick");
                None
            }
        }
    }
}

/// Periodically runs a [`Sweeper`] on the tokio runtime.
pub struct SweepScheduler {
    sweeper: Arc<Sweeper>,
    period: Duration,
}

impl SweepScheduler {
    /// Creates a scheduler with the given period.
    pub fn new(sweeper: Arc<Sweeper>, period: Duration) -> Self {
        Self { sweeper, period }
    }

    /// Spawns the sweep loop. The first sweep runs immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> SweepHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let (report_tx, report_rx) = watch::channel(None);
        let Self { sweeper, period } = self;

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        let sweeper = Arc::clone(&sweeper);
                        match tokio::task::spawn_blocking(move || sweeper.tick()).await {
                            Ok(Some(report)) => {
                                let _ = report_tx.send(Some(report));
                            }
                            Ok(None) => {}
                            Err(e) => tracing::error!(error = %e, "sweep task panicked"),
                        }
                    }
                }
            }

            tracing::info!("sweep scheduler stopped");
        });

        SweepHandle {
            shutdown: Some(shutdown_tx),
            reports: report_rx,
            join,
        }
    }
}

/// Handle to a running sweep loop.
///
/// Dropping the handle stops the loop after the sweep in flight.
pub struct SweepHandle {
    shutdown: Option<oneshot::Sender<()>>,
    reports: watch::Receiver<Option<SweepReport>>,
    join: JoinHandle<()>,
}

impl SweepHandle {
    /// Returns a receiver observing the latest successful sweep report.
    pub fn subscribe(&self) -> watch::Receiver<Option<SweepReport>> {
        self.reports.clone()
    }

    /// Stops the loop and waits for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.join).await {
            tracing::error!(error = %e, "sweep scheduler task failed");
        }
    }
}
