//! Axum router wiring.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::ui::{
    handler::{get_hints, get_room_detail, get_rooms, health_check, websocket_handler},
    state::AppState,
};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // any origin, any method
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .route("/api/hints", get(get_hints))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
