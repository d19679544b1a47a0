//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use labdot_app::ports::Probe;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the dashboard at `/`, API routes under `/api` and the liveness
/// check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>) -> Router
where
    P: Probe + 'static,
{
    Router::new()
        .route("/", get(crate::dashboard::index::<P>))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use labdot_app::board::IndicatorBoard;
    use labdot_app::ports::{ProbeResponse, TransportError};
    use labdot_app::services::status_updater::StatusUpdater;
    use labdot_domain::indicator::LoadingPolicy;
    use tower::ServiceExt;

    struct UnreachableProbe;
    struct NoResponse;

    impl ProbeResponse for NoResponse {
        fn status(&self) -> u16 {
            0
        }

        async fn text(self) -> Result<String, TransportError> {
            Ok(String::new())
        }
    }

    impl Probe for UnreachableProbe {
        type Response = NoResponse;

        async fn get(&self, _endpoint: &str) -> Result<NoResponse, TransportError> {
            Err(TransportError::Timeout)
        }
    }

    fn test_state() -> AppState<UnreachableProbe> {
        AppState::new(
            StatusUpdater::new(UnreachableProbe, LoadingPolicy::default()),
            IndicatorBoard::new(),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_route() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
