// Communication handlers - Conductor intercom and news board
use crate::domain::news::NewsDraft;
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
pub struct TripSearch {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct OutgoingMessage {
    #[serde(default)]
    pub text: String,
}

pub async fn search_trips(
    Query(search): Query<TripSearch>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let query = search.q.unwrap_or_default();
    let result = state.intercom_service.search_trips(&query).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn conversation(
    Path(trip_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.intercom_service.conversation(&trip_id).await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn send_message(
    Path(trip_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(message): JsonBody<OutgoingMessage>,
) -> impl IntoResponse {
    let result = state.intercom_service.send(&trip_id, &message.text).await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn list_news(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let result = state.news_service.list().await;
    reply(StatusCode::OK, &headers, result).await
}

pub async fn publish_news(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<NewsDraft>,
) -> impl IntoResponse {
    let result = state.news_service.publish(draft).await;
    reply(StatusCode::CREATED, &headers, result).await
}

pub async fn delete_news(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let result = state.news_service.delete(&id).await;
    reply(StatusCode::OK, &headers, result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::handlers::test_support::body_json;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let state = AppState::seeded();
        let search = TripSearch {
            q: Some("maria".into()),
        };
        let body = body_json(search_trips(Query(search), HeaderMap::new(), State(state.clone())).await.into_response()).await;
        let trips = body.as_array().unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0]["bus_number"], "PB-015");

        let body = body_json(
            search_trips(Query(TripSearch { q: None }), HeaderMap::new(), State(state))
                .await
                .into_response(),
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_message_appends_to_thread() {
        let state = AppState::seeded();
        let message = OutgoingMessage {
            text: "  Please confirm ETA  ".into(),
        };
        let response = send_message(Path("2".into()), HeaderMap::new(), State(state.clone()), JsonBody(message))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["text"], "Please confirm ETA");

        let body = body_json(conversation(Path("2".into()), HeaderMap::new(), State(state)).await.into_response()).await;
        assert_eq!(body["messages"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let state = AppState::seeded();
        let message = OutgoingMessage { text: "   ".into() };
        let response = send_message(Path("1".into()), HeaderMap::new(), State(state), JsonBody(message))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_publish_and_delete_news() {
        let state = AppState::seeded();
        let draft: NewsDraft = serde_json::from_value(json!({
            "title": "Holiday Schedule",
            "body": "Extra trips north on the long weekend",
            "category": "Operations",
            "date": "2026-03-01"
        }))
        .unwrap();
        let response = publish_news(HeaderMap::new(), State(state.clone()), JsonBody(draft))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let post = body_json(response).await;
        assert_eq!(post["author"], "Terminal Master");
        let id = post["id"].as_str().unwrap().to_string();

        let body = body_json(list_news(HeaderMap::new(), State(state.clone())).await.into_response()).await;
        assert_eq!(body["posts"][0]["id"], id.as_str());
        assert_eq!(body["counts"]["published"], 3);

        let response = delete_news(Path(id.clone()), HeaderMap::new(), State(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let response = delete_news(Path(id), HeaderMap::new(), State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_news_requires_title_category_date() {
        let state = AppState::seeded();
        let response = publish_news(HeaderMap::new(), State(state), JsonBody(NewsDraft::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["fields"], json!(["title", "category", "date"]));
    }
}
