//! Status updater — probe an endpoint and move its indicator to a terminal
//! classification.

use std::sync::Arc;

use tokio::task::JoinSet;

use labdot_domain::classification::Classification;
use labdot_domain::error::LabdotError;
use labdot_domain::id::IndicatorId;
use labdot_domain::indicator::LoadingPolicy;
use labdot_domain::probe::ProbeOutcome;
use labdot_domain::time::now;

use crate::board::{BoardEntry, IndicatorBoard, IndicatorHandle};
use crate::ports::{Probe, ProbeResponse};

/// Application service that turns probe outcomes into indicator updates.
///
/// No failure is ever surfaced to the caller: HTTP error statuses, transport
/// errors and a missing indicator all end up as a classification or a no-op.
pub struct StatusUpdater<P> {
    probe: P,
    policy: LoadingPolicy,
}

impl<P: Probe> StatusUpdater<P> {
    /// Create a new updater backed by the given probe.
    pub fn new(probe: P, policy: LoadingPolicy) -> Self {
        Self { probe, policy }
    }

    /// Loading policy applied on transport failures.
    #[must_use]
    pub fn policy(&self) -> LoadingPolicy {
        self.policy
    }

    /// Probe `endpoint` once and update `indicator` from the outcome.
    ///
    /// The probe is always performed. When `indicator` is `None` the update
    /// step is skipped and `None` is returned; otherwise the applied
    /// classification is returned. The indicator is only touched after the
    /// response (or failure) has been observed.
    pub async fn check(
        &self,
        endpoint: &str,
        indicator: Option<&IndicatorHandle>,
    ) -> Option<Classification> {
        let outcome = self.probe_endpoint(endpoint).await;

        let Some(handle) = indicator else {
            tracing::debug!(endpoint, "no indicator to update, skipping");
            return None;
        };

        let classification = handle.apply(outcome, self.policy, now());
        tracing::info!(endpoint, %classification, "indicator updated");
        Some(classification)
    }

    /// Check a registered indicator by id and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`LabdotError::NotFound`] when `id` is not on the board; no
    /// probe is sent in that case since there is no endpoint to probe.
    pub async fn check_registered(
        &self,
        board: &IndicatorBoard,
        id: &IndicatorId,
    ) -> Result<BoardEntry, LabdotError> {
        let registration = board.get(id)?;
        self.check(&registration.endpoint, board.handle(id).as_ref())
            .await;
        board.get(id)
    }

    async fn probe_endpoint(&self, endpoint: &str) -> ProbeOutcome {
        let response = match self.probe.get(endpoint).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%err, endpoint, "probe did not complete");
                return ProbeOutcome::TransportFailure;
            }
        };

        let code = response.status();
        tracing::debug!(endpoint, status = code, "probe answered");

        if Classification::for_status(code) != Classification::Warning {
            return ProbeOutcome::status(code);
        }

        match response.text().await {
            Ok(body) => ProbeOutcome::status_with_body(code, body),
            Err(err) => {
                tracing::debug!(%err, endpoint, status = code, "failed to read warning body");
                ProbeOutcome::TransportFailure
            }
        }
    }
}

impl<P: Probe + 'static> StatusUpdater<P> {
    /// Check every indicator on the board concurrently.
    ///
    /// Each check is independent; results are returned in completion order.
    pub async fn check_all(
        self: &Arc<Self>,
        board: &IndicatorBoard,
    ) -> Vec<(IndicatorId, Classification)> {
        let mut tasks = JoinSet::new();

        for (id, registration) in board.registrations() {
            let updater = Arc::clone(self);
            let id = id.clone();
            let endpoint = registration.endpoint.clone();
            let handle = registration.handle.clone();
            tasks.spawn(async move {
                let classification = updater.check(&endpoint, Some(&handle)).await;
                classification.map(|class| (id, class))
            });
        }

        let mut results = Vec::with_capacity(board.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "indicator check task failed"),
            }
        }
        results
    }
}
