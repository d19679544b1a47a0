//! JSON REST handlers for indicators.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use labdot_app::board::BoardEntry;
use labdot_app::ports::Probe;
use labdot_domain::classification::Classification;
use labdot_domain::id::IndicatorId;
use labdot_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// JSON representation of an indicator.
///
/// `tooltip` is the raw upstream body. Clients must insert it as text, never
/// as markup; `markers` lists the CSS classes the dashboard applies.
#[derive(Debug, Serialize)]
pub struct IndicatorView {
    pub id: IndicatorId,
    pub endpoint: String,
    pub classification: Classification,
    pub classes: Vec<Classification>,
    pub markers: Vec<&'static str>,
    pub tooltip: Option<String>,
    pub last_checked: Option<Timestamp>,
}

impl From<BoardEntry> for IndicatorView {
    fn from(entry: BoardEntry) -> Self {
        let BoardEntry {
            endpoint,
            indicator,
        } = entry;
        Self {
            classification: indicator.classification(),
            classes: indicator.classes().collect(),
            markers: indicator.markers(),
            tooltip: indicator.tooltip().map(|tooltip| tooltip.text().to_owned()),
            last_checked: indicator.last_checked,
            id: indicator.id,
            endpoint,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<IndicatorView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and check endpoints.
pub enum GetResponse {
    Ok(Json<IndicatorView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/indicators`
pub async fn list<P>(State(state): State<AppState<P>>) -> Result<ListResponse, ApiError>
where
    P: Probe + 'static,
{
    let views = state
        .board
        .snapshot()
        .into_iter()
        .map(IndicatorView::from)
        .collect();
    Ok(ListResponse::Ok(Json(views)))
}

/// `GET /api/indicators/{id}`
pub async fn get<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: Probe + 'static,
{
    let id = IndicatorId::from_str(&id)?;
    let entry = state.board.get(&id)?;
    Ok(GetResponse::Ok(Json(entry.into())))
}

/// `POST /api/indicators/{id}/check`
///
/// Probes the indicator's endpoint now and returns the updated state.
pub async fn check<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: Probe + 'static,
{
    let id = IndicatorId::from_str(&id)?;
    let entry = state.updater.check_registered(&state.board, &id).await?;
    Ok(GetResponse::Ok(Json(entry.into())))
}
