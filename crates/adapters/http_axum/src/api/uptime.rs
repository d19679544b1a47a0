//! JSON handlers for per-indicator uptime statistics.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use labdot_app::board::BoardEntry;
use labdot_app::ports::Probe;
use labdot_domain::id::IndicatorId;
use labdot_domain::time::{Timestamp, now};
use labdot_domain::uptime::DAYS;

use crate::error::ApiError;
use crate::state::AppState;

const WEEKDAYS: [&str; DAYS] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// One hour bucket.
#[derive(Debug, Serialize)]
pub struct HourView {
    pub hour: usize,
    pub online: u32,
    pub total: u32,
    pub percentage: Option<f64>,
}

/// One weekday row, 24 hours long.
#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: &'static str,
    pub hours: Vec<HourView>,
}

/// Weekday × hour uptime matrix of one indicator.
#[derive(Debug, Serialize)]
pub struct UptimeView {
    pub id: IndicatorId,
    pub since: Option<Timestamp>,
    pub samples: u32,
    pub overall: Option<f64>,
    pub days: Vec<DayView>,
}

impl From<BoardEntry> for UptimeView {
    fn from(entry: BoardEntry) -> Self {
        let uptime = entry.indicator.uptime();
        let days = WEEKDAYS
            .into_iter()
            .zip(uptime.rows())
            .map(|(day, row)| DayView {
                day,
                hours: row
                    .iter()
                    .enumerate()
                    .map(|(hour, cell)| HourView {
                        hour,
                        online: cell.online,
                        total: cell.total,
                        percentage: cell.percentage(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            since: uptime.since(),
            samples: uptime.samples(),
            overall: uptime.overall(),
            days,
            id: entry.indicator.id,
        }
    }
}

/// Possible responses from the uptime endpoints.
pub enum UptimeResponse {
    Ok(Json<UptimeView>),
}

impl IntoResponse for UptimeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/indicators/{id}/uptime`
pub async fn get<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<UptimeResponse, ApiError>
where
    P: Probe + 'static,
{
    let id = IndicatorId::from_str(&id)?;
    let entry = state.board.get(&id)?;
    Ok(UptimeResponse::Ok(Json(entry.into())))
}

/// `POST /api/indicators/{id}/uptime/reset`
pub async fn reset<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<UptimeResponse, ApiError>
where
    P: Probe + 'static,
{
    let id = IndicatorId::from_str(&id)?;
    let entry = state.board.reset_uptime(&id, now())?;
    Ok(UptimeResponse::Ok(Json(entry.into())))
}
