//! HTTP API endpoint handlers.
//!
//! Read-only views; none of them create rooms.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use roomclock_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    domain::{ConnectionRepository, Room, RoomId},
    infrastructure::{
        dto::http::{HealthDto, RoomDetailDto, RoomSummaryDto, SubscriberDetailDto},
        hint_catalog::HintCatalog,
    },
    ui::state::AppState,
};

async fn summarize(state: &AppState, room_id: &RoomId, room: &Room) -> RoomSummaryDto {
    RoomSummaryDto {
        id: room_id.to_string(),
        time_left: room.time_left,
        hint: room.hint.clone(),
        is_running: room.is_running,
        subscribers: state.connections.count_subscribers(room_id).await,
        created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        rooms: state.rooms.snapshot().await.len(),
        connections: state.connections.count_connections().await,
    })
}

/// Get list of rooms, sorted by id
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let snapshot = state.rooms.snapshot().await;
    let mut rooms = Vec::with_capacity(snapshot.len());
    for (room_id, room) in snapshot.iter() {
        rooms.push(summarize(&state, room_id, room).await);
    }
    Json(rooms)
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = RoomId::new(room_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let room = state
        .rooms
        .find(&room_id)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let subscribers = state
        .connections
        .subscribers(&room_id)
        .await
        .into_iter()
        .map(|(connection_id, connected_at)| SubscriberDetailDto {
            connection_id: connection_id.to_string(),
            connected_at: timestamp_to_jst_rfc3339(connected_at.value()),
        })
        .collect();

    Ok(Json(RoomDetailDto {
        id: room_id.to_string(),
        time_left: room.time_left,
        hint: room.hint,
        is_running: room.is_running,
        subscribers,
        created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
    }))
}

/// Get the static hint catalog
pub async fn get_hints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HintCatalog>, StatusCode> {
    state
        .hints
        .as_ref()
        .map(|catalog| Json(catalog.as_ref().clone()))
        .ok_or(StatusCode::NOT_FOUND)
}
