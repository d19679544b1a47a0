//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod indicators;
#[allow(clippy::missing_errors_doc)]
pub mod uptime;

use axum::Router;
use axum::routing::{get, post};

use labdot_app::ports::Probe;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<P>() -> Router<AppState<P>>
where
    P: Probe + 'static,
{
    Router::new()
        .route("/indicators", get(indicators::list::<P>))
        .route("/indicators/{id}", get(indicators::get::<P>))
        .route("/indicators/{id}/check", post(indicators::check::<P>))
        .route("/indicators/{id}/uptime", get(uptime::get::<P>))
        .route("/indicators/{id}/uptime/reset", post(uptime::reset::<P>))
}
