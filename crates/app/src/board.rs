//! In-process indicator board.
//!
//! The board is filled once at startup: each registration pairs an
//! [`IndicatorId`] with the endpoint it monitors and hands back an
//! [`IndicatorHandle`]. Updates go through the handle, so no lookup by id
//! happens on the hot path.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use labdot_domain::classification::Classification;
use labdot_domain::error::{LabdotError, NotFoundError, ValidationError};
use labdot_domain::id::IndicatorId;
use labdot_domain::indicator::{Indicator, LoadingPolicy};
use labdot_domain::probe::ProbeOutcome;
use labdot_domain::time::Timestamp;

/// Shared reference to one indicator.
///
/// Cloning is cheap. The lock is only held for the synchronous mutation,
/// never across an `.await`.
#[derive(Debug, Clone)]
pub struct IndicatorHandle(Arc<Mutex<Indicator>>);

impl IndicatorHandle {
    /// Wrap an indicator in a new handle.
    #[must_use]
    pub fn new(indicator: Indicator) -> Self {
        Self(Arc::new(Mutex::new(indicator)))
    }

    /// Copy of the current indicator state.
    #[must_use]
    pub fn snapshot(&self) -> Indicator {
        self.lock().clone()
    }

    /// Apply a probe outcome to the underlying indicator.
    pub fn apply(
        &self,
        outcome: ProbeOutcome,
        policy: LoadingPolicy,
        at: Timestamp,
    ) -> Classification {
        self.lock().apply(outcome, policy, at)
    }

    /// Forget the uptime samples of the underlying indicator.
    pub fn reset_uptime(&self, at: Timestamp) {
        self.lock().reset_uptime(at);
    }

    fn lock(&self) -> MutexGuard<'_, Indicator> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A registered indicator together with the endpoint it monitors.
#[derive(Debug, Clone)]
pub struct Registration {
    /// URL probed for this indicator.
    pub endpoint: String,
    /// Handle to the indicator itself.
    pub handle: IndicatorHandle,
}

/// Point-in-time view of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// URL probed for this indicator.
    pub endpoint: String,
    /// Indicator state at the time of the snapshot.
    pub indicator: Indicator,
}

/// The set of indicators shown on the dashboard.
#[derive(Debug, Default)]
pub struct IndicatorBoard {
    entries: BTreeMap<IndicatorId, Registration>,
}

impl IndicatorBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new indicator in the Loading state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEndpoint`] for a blank endpoint and
    /// [`ValidationError::DuplicateId`] when `id` is already registered.
    pub fn register(
        &mut self,
        id: IndicatorId,
        endpoint: impl Into<String>,
    ) -> Result<IndicatorHandle, ValidationError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }
        if self.entries.contains_key(&id) {
            return Err(ValidationError::DuplicateId(id.to_string()));
        }

        let handle = IndicatorHandle::new(Indicator::new(id.clone()));
        tracing::debug!(indicator = %id, %endpoint, "indicator registered");
        self.entries.insert(
            id,
            Registration {
                endpoint,
                handle: handle.clone(),
            },
        );
        Ok(handle)
    }

    /// Handle of a registered indicator, or `None` if the id is unknown.
    #[must_use]
    pub fn handle(&self, id: &IndicatorId) -> Option<IndicatorHandle> {
        self.entries.get(id).map(|reg| reg.handle.clone())
    }

    /// Registration for `id`, if any.
    #[must_use]
    pub fn registration(&self, id: &IndicatorId) -> Option<&Registration> {
        self.entries.get(id)
    }

    /// Iterate over all registrations in id order.
    pub fn registrations(&self) -> impl Iterator<Item = (&IndicatorId, &Registration)> {
        self.entries.iter()
    }

    /// Snapshot a single indicator.
    ///
    /// # Errors
    ///
    /// Returns [`LabdotError::NotFound`] when `id` is not registered.
    pub fn get(&self, id: &IndicatorId) -> Result<BoardEntry, LabdotError> {
        let reg = self.entries.get(id).ok_or_else(|| NotFoundError {
            entity: "Indicator",
            id: id.to_string(),
        })?;
        Ok(BoardEntry {
            endpoint: reg.endpoint.clone(),
            indicator: reg.handle.snapshot(),
        })
    }

    /// Reset the uptime statistics of one indicator and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`LabdotError::NotFound`] when `id` is not registered.
    pub fn reset_uptime(&self, id: &IndicatorId, at: Timestamp) -> Result<BoardEntry, LabdotError> {
        let handle = self.handle(id).ok_or_else(|| NotFoundError {
            entity: "Indicator",
            id: id.to_string(),
        })?;
        handle.reset_uptime(at);
        tracing::debug!(indicator = %id, "uptime statistics reset");
        self.get(id)
    }

    /// Snapshot every indicator, in id order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BoardEntry> {
        self.entries
            .values()
            .map(|reg| BoardEntry {
                endpoint: reg.endpoint.clone(),
                indicator: reg.handle.snapshot(),
            })
            .collect()
    }

    /// Number of registered indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no indicator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdot_domain::time::now;

    fn id(value: &str) -> IndicatorId {
        IndicatorId::new(value).unwrap()
    }

    #[test]
    fn should_register_indicator_in_loading_state() {
        let mut board = IndicatorBoard::new();
        let handle = board.register(id("nas"), "http://nas.lan/health").unwrap();
        assert!(handle.snapshot().is_loading());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn should_reject_duplicate_id() {
        let mut board = IndicatorBoard::new();
        board.register(id("nas"), "http://a").unwrap();
        let err = board.register(id("nas"), "http://b").unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId("nas".to_string()));
    }

    #[test]
    fn should_reject_blank_endpoint() {
        let mut board = IndicatorBoard::new();
        let err = board.register(id("nas"), "  ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyEndpoint);
        assert!(board.is_empty());
    }

    #[test]
    fn should_return_none_for_unknown_handle() {
        let board = IndicatorBoard::new();
        assert!(board.handle(&id("ghost")).is_none());
    }

    #[test]
    fn should_return_not_found_for_unknown_get() {
        let board = IndicatorBoard::new();
        let err = board.get(&id("ghost")).unwrap_err();
        assert!(matches!(err, LabdotError::NotFound(_)));
    }

    #[test]
    fn should_share_state_between_handle_clones() {
        let mut board = IndicatorBoard::new();
        let handle = board.register(id("nas"), "http://nas").unwrap();
        let other = board.handle(&id("nas")).unwrap();

        handle.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());

        assert_eq!(other.snapshot().classification(), Classification::Success);
        assert_eq!(
            board.get(&id("nas")).unwrap().indicator.classification(),
            Classification::Success
        );
    }

    #[test]
    fn should_snapshot_in_id_order() {
        let mut board = IndicatorBoard::new();
        board.register(id("router"), "http://router").unwrap();
        board.register(id("nas"), "http://nas").unwrap();

        let ids: Vec<String> = board
            .snapshot()
            .into_iter()
            .map(|entry| entry.indicator.id.to_string())
            .collect();
        assert_eq!(ids, vec!["nas", "router"]);
    }

    #[test]
    fn should_record_uptime_through_handle_and_reset_by_id() {
        let mut board = IndicatorBoard::new();
        let handle = board.register(id("nas"), "http://nas").unwrap();
        handle.apply(ProbeOutcome::status(200), LoadingPolicy::default(), now());
        handle.apply(ProbeOutcome::status(503), LoadingPolicy::default(), now());
        assert_eq!(board.get(&id("nas")).unwrap().indicator.uptime().samples(), 2);

        let entry = board.reset_uptime(&id("nas"), now()).unwrap();

        assert_eq!(entry.indicator.uptime().samples(), 0);
        assert!(entry.indicator.uptime().since().is_some());
        assert_eq!(entry.indicator.classification(), Classification::Error);
    }

    #[test]
    fn should_return_not_found_when_resetting_unknown_uptime() {
        let board = IndicatorBoard::new();
        let err = board.reset_uptime(&id("ghost"), now()).unwrap_err();
        assert!(matches!(err, LabdotError::NotFound(_)));
    }
}
