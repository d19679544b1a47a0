//! Server-side rendered dashboard: one dot per indicator.
//!
//! The page reloads itself through `<meta http-equiv="refresh">`. Tooltip
//! text comes from remote endpoints and is auto-escaped by the template.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use labdot_app::board::BoardEntry;
use labdot_app::ports::Probe;
use labdot_domain::classification::Classification;

use crate::state::AppState;

const REFRESH_SECONDS: u32 = 15;

/// One indicator as rendered on the page.
pub struct DashboardRow {
    id: String,
    endpoint: String,
    classification: Classification,
    markers: Vec<&'static str>,
    tooltip: Option<String>,
}

impl From<BoardEntry> for DashboardRow {
    fn from(entry: BoardEntry) -> Self {
        let BoardEntry {
            endpoint,
            indicator,
        } = entry;
        Self {
            id: indicator.id.to_string(),
            classification: indicator.classification(),
            markers: indicator.markers(),
            tooltip: indicator.tooltip().map(|tooltip| tooltip.text().to_owned()),
            endpoint,
        }
    }
}

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    indicators: Vec<DashboardRow>,
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — render every indicator.
pub async fn index<P>(State(state): State<AppState<P>>) -> DashboardTemplate
where
    P: Probe + 'static,
{
    DashboardTemplate {
        refresh_seconds: REFRESH_SECONDS,
        indicators: state
            .board
            .snapshot()
            .into_iter()
            .map(DashboardRow::from)
            .collect(),
    }
}
