//! Fan-out of room state to connections.
//!
//! Per-room fields go out as three separate events (`updateTime`, `updateHint`,
//! `updateRunning`) to the room's subscribers only; the full `roomsSnapshot` goes to every
//! connection after each mutation and each tick.

use crate::{
    domain::{ConnectionId, RoomUpdate, RoomsSnapshot, TickReport},
    infrastructure::{dto::websocket::ServerEvent, repository::InMemoryConnectionRepository},
};

fn encode(event: &ServerEvent) -> Option<String> {
    match event.to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize {:?}: {}", event, e);
            None
        }
    }
}

/// Send the full room state to the joining connection only
pub async fn send_room_state(
    connections: &InMemoryConnectionRepository,
    connection_id: &ConnectionId,
    update: &RoomUpdate,
) {
    if let Some(json) = encode(&ServerEvent::room_state(&update.room_id, &update.room)) {
        connections.send_to(connection_id, &json).await;
    }
}

/// Send the snapshot of every room to every connection
pub async fn broadcast_snapshot(connections: &InMemoryConnectionRepository, snapshot: &RoomsSnapshot) {
    if let Some(json) = encode(&ServerEvent::rooms_snapshot(snapshot)) {
        let sent = connections.send_to_all(&json).await;
        tracing::trace!("Broadcasted roomsSnapshot to {} connection(s)", sent);
    }
}

/// Broadcast a room's state to its subscribers, then the snapshot to everyone.
///
/// Sent on every mutation, whether or not the state actually changed.
pub async fn broadcast_room_update(connections: &InMemoryConnectionRepository, update: &RoomUpdate) {
    let events = [
        ServerEvent::UpdateTime(update.room.time_left),
        ServerEvent::UpdateHint(update.room.hint.clone()),
        ServerEvent::UpdateRunning(update.room.is_running),
    ];
    for event in &events {
        if let Some(json) = encode(event) {
            connections.send_to_room(&update.room_id, &json).await;
        }
    }
    broadcast_snapshot(connections, &update.snapshot).await;
}

/// Broadcast the outcome of one tick.
///
/// Each changed room gets `updateTime`, plus `updateRunning: false` when it just stopped.
/// The snapshot of the whole registry follows, even when nothing changed.
pub async fn broadcast_tick(connections: &InMemoryConnectionRepository, report: &TickReport) {
    for change in &report.changes {
        if let Some(json) = encode(&ServerEvent::UpdateTime(change.time_left)) {
            connections.send_to_room(&change.room_id, &json).await;
        }
        if change.stopped
            && let Some(json) = encode(&ServerEvent::UpdateRunning(false))
        {
            connections.send_to_room(&change.room_id, &json).await;
        }
    }
    broadcast_snapshot(connections, &report.snapshot).await;
}
