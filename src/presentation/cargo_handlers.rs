// Cargo handlers - Waybill drafting, pricing quotes and arrival handoff
use crate::domain::waybill::{parse_weight, CargoType, WaybillPatch};
use crate::presentation::app_state::AppState;
use crate::presentation::extract::JsonBody;
use crate::presentation::handlers::reply;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct QuoteQuery {
    /// Raw form input; anything unparseable prices at zero
    pub weight: Option<String>,
    pub cargo_type: Option<CargoType>,
}

pub async fn list_waybills(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.waybill_service.list_waybills().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn quote(
    Query(query): Query<QuoteQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let weight = query.weight.as_deref().and_then(parse_weight);
    let quote = state.waybill_service.quote(weight, query.cargo_type);
    reply(StatusCode::OK, &headers, Ok(quote)).await
}

pub async fn form_options(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let options = state.waybill_service.form_options();
    reply(StatusCode::OK, &headers, Ok(options)).await
}

pub async fn open_draft(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.waybill_service.open_draft().await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn get_draft(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.waybill_service.get_draft(&id).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn update_draft(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(patch): JsonBody<WaybillPatch>,
) -> impl IntoResponse {
    let result = state.waybill_service.update_draft(&id, patch).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn next_step(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.waybill_service.next_step(&id).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn previous_step(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.waybill_service.previous_step(&id).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn submit_draft(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.waybill_service.submit_draft(&id).await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn cancel_draft(Path(id): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.waybill_service.cancel_draft(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn pending_arrivals(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.cargo_service.pending_arrivals().await;
    reply(StatusCode::OK, &headers, result).await
}

/// Confirm handoff of an arrived consignment
pub async fn unload_arrival(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.cargo_service.unload(&id).await;
    reply(StatusCode::OK, &headers, result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::handlers::test_support::body_json;
    use serde_json::json;

    async fn open(state: &Arc<AppState>) -> String {
        let response = open_draft(HeaderMap::new(), State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_quote_applies_cargo_multiplier() {
        let state = AppState::seeded();
        let query = QuoteQuery {
            weight: Some("10".into()),
            cargo_type: Some(CargoType::Electronics),
        };
        let body = body_json(quote(Query(query), HeaderMap::new(), State(state.clone())).await.into_response()).await;
        assert_eq!(body["price"], 750);

        let query = QuoteQuery {
            weight: Some("heavy".into()),
            cargo_type: Some(CargoType::Perishable),
        };
        let body = body_json(quote(Query(query), HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body["price"], 0);
    }

    #[tokio::test]
    async fn test_draft_submit_issues_waybill() {
        let state = AppState::seeded();
        let id = open(&state).await;

        let patch: WaybillPatch = serde_json::from_value(json!({
            "sender_name": "Lorna Bautista",
            "sender_contact": "0917 555 0101",
            "pickup_terminal": "cubao",
            "receiver_name": "Ramon Aquino",
            "receiver_contact": "0918 555 0202",
            "delivery_terminal": "baguio",
            "cargo_type": "perishable",
            "cargo_description": "Strawberries",
            "cargo_weight_kg": 12.0,
            "cargo_value": 3000.0
        }))
        .unwrap();
        let response = update_draft(Path(id.clone()), HeaderMap::new(), State(state.clone()), JsonBody(patch))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = submit_draft(Path(id.clone()), HeaderMap::new(), State(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert!(body["tracking_number"].as_str().unwrap().starts_with("TRK-"));
        assert_eq!(body["price"], 780);

        let response = get_draft(Path(id), HeaderMap::new(), State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(list_waybills(HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_form_options_carry_labels() {
        let state = AppState::seeded();
        let body = body_json(form_options(HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body["terminals"].as_array().unwrap().len(), 8);
        assert_eq!(body["terminals"][2]["value"], "grace-park");
        assert_eq!(body["cargo_types"][3]["label"], "Standard Parcel");
    }

    #[tokio::test]
    async fn test_incomplete_draft_cannot_submit() {
        let state = AppState::seeded();
        let id = open(&state).await;

        let response = submit_draft(Path(id), HeaderMap::new(), State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["fields"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_steps_stay_in_bounds() {
        let state = AppState::seeded();
        let id = open(&state).await;

        let body = body_json(
            previous_step(Path(id.clone()), HeaderMap::new(), State(state.clone()))
                .await
                .into_response(),
        )
        .await;
        assert_eq!(body["step"], 1);

        for _ in 0..5 {
            let _ = next_step(Path(id.clone()), HeaderMap::new(), State(state.clone())).await;
        }
        let body = body_json(get_draft(Path(id), HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body["step"], 4);
    }

    #[tokio::test]
    async fn test_cancel_discards_draft() {
        let state = AppState::seeded();
        let id = open(&state).await;

        let response = cancel_draft(Path(id.clone()), State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = cancel_draft(Path(id), State(state)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unload_twice_is_not_found() {
        let state = AppState::seeded();
        let response = unload_arrival(Path("1".to_string()), HeaderMap::new(), State(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = unload_arrival(Path("1".to_string()), HeaderMap::new(), State(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(pending_arrivals(HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
