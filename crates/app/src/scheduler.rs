//! Refresh scheduler — re-checks each indicator on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};

use labdot_domain::id::IndicatorId;

use crate::board::{IndicatorBoard, IndicatorHandle};
use crate::ports::Probe;
use crate::services::status_updater::StatusUpdater;

/// Background refresh of every registered indicator.
///
/// Each indicator gets its own loop: check, then sleep for the interval. A
/// check that never completes only stalls its own indicator. The first
/// check of every loop starts immediately. Everything stops when the
/// returned [`JoinHandle`] is aborted.
pub struct RefreshScheduler<P> {
    updater: Arc<StatusUpdater<P>>,
    board: Arc<IndicatorBoard>,
    interval: Duration,
}

impl<P: Probe + 'static> RefreshScheduler<P> {
    /// Spawn the scheduler on the current tokio runtime.
    pub fn start(
        updater: Arc<StatusUpdater<P>>,
        board: Arc<IndicatorBoard>,
        interval: Duration,
    ) -> JoinHandle<()> {
        let scheduler = Self {
            updater,
            board,
            interval,
        };

        tokio::spawn(scheduler.run())
    }

    async fn run(self) {
        if self.board.is_empty() {
            tracing::trace!("no indicators registered, nothing to refresh");
            return;
        }

        // Dropping the set (when this task is aborted) aborts every loop.
        let mut loops = JoinSet::new();
        for (id, registration) in self.board.registrations() {
            loops.spawn(Self::watch(
                Arc::clone(&self.updater),
                id.clone(),
                registration.endpoint.clone(),
                registration.handle.clone(),
                self.interval,
            ));
        }
        tracing::debug!(
            indicators = loops.len(),
            interval_secs = self.interval.as_secs(),
            "refresh loops started"
        );

        while let Some(joined) = loops.join_next().await {
            if let Err(err) = joined {
                tracing::warn!(%err, "refresh loop stopped");
            }
        }
    }

    async fn watch(
        updater: Arc<StatusUpdater<P>>,
        id: IndicatorId,
        endpoint: String,
        handle: IndicatorHandle,
        interval: Duration,
    ) {
        loop {
            if let Some(classification) = updater.check(&endpoint, Some(&handle)).await {
                tracing::trace!(indicator = %id, %classification, "refreshed");
            }
            tokio::time::sleep(interval).await;
        }
    }
}
