// HTTP request handlers - Session, dashboard, reports and the live map
use crate::application::error::ServiceResult;
use crate::domain::fleet_map::{FleetSnapshot, Waypoint, ROUTE_WAYPOINTS};
use crate::domain::reports::DateRange;
use crate::infrastructure::chunked_json::stream_from_watch;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::extract::JsonBody;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Encode a service result, honoring the client's Brotli preference
pub async fn reply<T: Serialize>(
    status: StatusCode,
    headers: &HeaderMap,
    result: ServiceResult<T>,
) -> Response {
    match result {
        Ok(value) => match json_response(status, &value, accepts_brotli(headers)).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Err(e) => e.into_response(),
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub range: Option<DateRange>,
}

#[derive(Serialize)]
pub struct MapView {
    #[serde(flatten)]
    pub snapshot: FleetSnapshot,
    pub waypoints: &'static [Waypoint],
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn login(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> impl IntoResponse {
    let result = state
        .session_service
        .login(&request.username, &request.password);
    reply(StatusCode::OK, &headers, result).await
}

pub async fn dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.dashboard_service.summary().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn reports(
    Query(query): Query<ReportQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let report = state.report_service.report(query.range.unwrap_or_default());
    reply(StatusCode::OK, &headers, Ok(report)).await
}

/// Current unit positions plus the route polyline
pub async fn map_snapshot(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = MapView {
        snapshot: state.live_map_service.snapshot().await,
        waypoints: &ROUTE_WAYPOINTS,
    };
    reply(StatusCode::OK, &headers, Ok(view)).await
}

/// Stream a snapshot now and after every simulation tick
pub async fn map_stream(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rx = state.live_map_service.subscribe();
    let stopped = state.live_map_service.stopped();
    stream_from_watch(rx, stopped, accepts_brotli(&headers)).await
}
