//! Shared application state for axum handlers.

use std::sync::Arc;

use labdot_app::board::IndicatorBoard;
use labdot_app::ports::Probe;
use labdot_app::services::status_updater::StatusUpdater;

/// Application state shared across all axum handlers.
///
/// Generic over the probe type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the probe itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<P> {
    /// Probe-and-update service.
    pub updater: Arc<StatusUpdater<P>>,
    /// Registered indicators.
    pub board: Arc<IndicatorBoard>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            updater: Arc::clone(&self.updater),
            board: Arc::clone(&self.board),
        }
    }
}

impl<P: Probe + 'static> AppState<P> {
    /// Create a new application state from owned parts.
    pub fn new(updater: StatusUpdater<P>, board: IndicatorBoard) -> Self {
        Self {
            updater: Arc::new(updater),
            board: Arc::new(board),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` parts.
    ///
    /// Use this when the updater and board are shared with the refresh
    /// scheduler before constructing the HTTP state.
    pub fn from_arcs(updater: Arc<StatusUpdater<P>>, board: Arc<IndicatorBoard>) -> Self {
        Self { updater, board }
    }
}
