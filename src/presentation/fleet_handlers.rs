// Fleet handlers - Dispatch board, schedule and maintenance endpoints
use crate::domain::dispatch::{DispatchStatus, TripPatch};
use crate::domain::schedule::{DutyStatus, NewTrip, ScheduleTab};
use crate::presentation::app_state::AppState;
use crate::presentation::extract::JsonBody;
use crate::presentation::handlers::reply;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub tab: Option<ScheduleTab>,
}

#[derive(Deserialize)]
pub struct DistanceLog {
    pub daily_distance: i64,
}

#[derive(Deserialize)]
pub struct OdometerReading {
    pub current_mileage: i64,
}

pub async fn list_dispatches(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.dispatch_service.list_dispatches().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn update_dispatch_status(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(update): JsonBody<StatusUpdate<DispatchStatus>>,
) -> impl IntoResponse {
    let result = state.dispatch_service.set_dispatch_status(&id, update.status).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn dispatch_board(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.dispatch_service.board().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn add_trip(
    Path(route_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.dispatch_service.add_trip(&route_id).await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn update_trip(
    Path((route_id, trip_id)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(patch): JsonBody<TripPatch>,
) -> impl IntoResponse {
    let result = state.dispatch_service.update_trip(&route_id, &trip_id, patch).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn remove_trip(
    Path((route_id, trip_id)): Path<(String, String)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.dispatch_service.remove_trip(&route_id, &trip_id).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn schedule(
    Query(query): Query<ScheduleQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state
        .dispatch_service
        .schedule(query.tab.unwrap_or_default())
        .await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn schedule_trip(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(trip): JsonBody<NewTrip>,
) -> impl IntoResponse {
    let result = state.dispatch_service.schedule_trip(trip).await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn update_duty_status(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(update): JsonBody<StatusUpdate<DutyStatus>>,
) -> impl IntoResponse {
    let result = state.dispatch_service.set_duty_status(&id, update.status).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn maintenance_board(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.maintenance_service.board().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn maintenance_progress(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.maintenance_service.progress().await;
    reply(StatusCode::OK, &headers, result).await
}

/// Apply the bus's QR-scan daily distance
pub async fn verify_mileage(
    Path(bus_number): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.maintenance_service.verify_mileage(&bus_number).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn log_distance(
    Path(bus_number): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(log): JsonBody<DistanceLog>,
) -> impl IntoResponse {
    let result = state
        .maintenance_service
        .log_distance(&bus_number, log.daily_distance)
        .await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn encode_mileage(
    Path(bus_number): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(reading): JsonBody<OdometerReading>,
) -> impl IntoResponse {
    let result = state
        .maintenance_service
        .encode_mileage(&bus_number, reading.current_mileage)
        .await;
    reply(StatusCode::OK, &headers, result).await
}
