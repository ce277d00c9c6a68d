// Route table for the fleet operations API
use crate::presentation::app_state::AppState;
use crate::presentation::{cargo_handlers, comms_handlers, fleet_handlers, handlers};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is handled manually in the response builders, so there is no CompressionLayer
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route("/session", post(handlers::login))
        .route("/dashboard", get(handlers::dashboard))
        .route("/reports", get(handlers::reports))
        .route("/map", get(handlers::map_snapshot))
        .route("/map/stream", get(handlers::map_stream))
        .route("/dispatches", get(fleet_handlers::list_dispatches))
        .route("/dispatches/:id/status", put(fleet_handlers::update_dispatch_status))
        .route("/dispatch-board", get(fleet_handlers::dispatch_board))
        .route(
            "/dispatch-board/routes/:route_id/trips",
            post(fleet_handlers::add_trip),
        )
        .route(
            "/dispatch-board/routes/:route_id/trips/:trip_id",
            put(fleet_handlers::update_trip).delete(fleet_handlers::remove_trip),
        )
        .route(
            "/schedule",
            get(fleet_handlers::schedule).post(fleet_handlers::schedule_trip),
        )
        .route("/schedule/:id/status", put(fleet_handlers::update_duty_status))
        .route("/maintenance", get(fleet_handlers::maintenance_board))
        .route("/maintenance/progress", get(fleet_handlers::maintenance_progress))
        .route("/maintenance/:bus_number/verify", post(fleet_handlers::verify_mileage))
        .route("/maintenance/:bus_number/distance", post(fleet_handlers::log_distance))
        .route("/maintenance/:bus_number/mileage", put(fleet_handlers::encode_mileage))
        .route("/waybills", get(cargo_handlers::list_waybills))
        .route("/waybills/quote", get(cargo_handlers::quote))
        .route("/waybills/options", get(cargo_handlers::form_options))
        .route("/waybills/drafts", post(cargo_handlers::open_draft))
        .route(
            "/waybills/drafts/:id",
            get(cargo_handlers::get_draft)
                .patch(cargo_handlers::update_draft)
                .delete(cargo_handlers::cancel_draft),
        )
        .route("/waybills/drafts/:id/next", post(cargo_handlers::next_step))
        .route("/waybills/drafts/:id/back", post(cargo_handlers::previous_step))
        .route("/waybills/drafts/:id/submit", post(cargo_handlers::submit_draft))
        .route("/cargo/arrivals", get(cargo_handlers::pending_arrivals))
        .route("/cargo/arrivals/:id/unload", post(cargo_handlers::unload_arrival))
        .route("/intercom/trips", get(comms_handlers::search_trips))
        .route(
            "/intercom/trips/:id/messages",
            get(comms_handlers::conversation).post(comms_handlers::send_message),
        )
        .route(
            "/news",
            get(comms_handlers::list_news).post(comms_handlers::publish_news),
        )
        .route("/news/:id", delete(comms_handlers::delete_news))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
