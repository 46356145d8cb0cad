//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub time_left: u32,
    pub hint: String,
    pub is_running: bool,
    /// Connections currently subscribed to the room
    pub subscribers: usize,
    pub created_at: String, // ISO 8601
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub id: String,
    pub time_left: u32,
    pub hint: String,
    pub is_running: bool,
    pub subscribers: Vec<SubscriberDetailDto>,
    pub created_at: String, // ISO 8601
}

/// Subscribed connection for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDetailDto {
    pub connection_id: String,
    pub connected_at: String, // ISO 8601
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub rooms: usize,
    pub connections: usize,
}
