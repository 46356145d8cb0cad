//! WebSocket message DTOs.
//!
//! Every frame is a JSON text frame shaped as `{"event": <name>, "data": <payload>}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{Room, RoomId, RoomsSnapshot};

/// Errors raised while decoding an inbound frame
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame is not a valid event object: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

/// Raw inbound frame, before the event name is checked
#[derive(Debug, Clone, Deserialize)]
struct InboundFrame {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Events sent by clients.
///
/// Payloads are kept as raw JSON: room ids and hints are validated leniently by the
/// use cases (non-string room ids fall back to the default room, for example).
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    JoinRoom(Value),
    StartGame(Value),
    PauseGame(Value),
    ResetGame(Value),
    UpdateHint(Value),
}

impl ClientEvent {
    /// Decode a text frame
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let frame: InboundFrame = serde_json::from_str(text)?;
        let event = match frame.event.as_str() {
            "joinRoom" => Self::JoinRoom(frame.data),
            "startGame" => Self::StartGame(frame.data),
            "pauseGame" => Self::PauseGame(frame.data),
            "resetGame" => Self::ResetGame(frame.data),
            "updateHint" => Self::UpdateHint(frame.data),
            _ => return Err(FrameError::UnknownEvent(frame.event)),
        };
        Ok(event)
    }

    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom(_) => "joinRoom",
            Self::StartGame(_) => "startGame",
            Self::PauseGame(_) => "pauseGame",
            Self::ResetGame(_) => "resetGame",
            Self::UpdateHint(_) => "updateHint",
        }
    }
}

/// Full state of one room, sent to a connection when it joins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub room_id: String,
    pub time_left: u32,
    pub hint: String,
    pub is_running: bool,
}

/// State of one room inside a `roomsSnapshot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshotDto {
    pub time_left: u32,
    pub hint: String,
    pub is_running: bool,
}

impl From<&Room> for RoomSnapshotDto {
    fn from(room: &Room) -> Self {
        Self {
            time_left: room.time_left,
            hint: room.hint.clone(),
            is_running: room.is_running,
        }
    }
}

/// Events sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    RoomState(RoomStateDto),
    UpdateTime(u32),
    UpdateHint(String),
    UpdateRunning(bool),
    RoomsSnapshot(BTreeMap<String, RoomSnapshotDto>),
}

impl ServerEvent {
    pub fn room_state(room_id: &RoomId, room: &Room) -> Self {
        Self::RoomState(RoomStateDto {
            room_id: room_id.to_string(),
            time_left: room.time_left,
            hint: room.hint.clone(),
            is_running: room.is_running,
        })
    }

    pub fn rooms_snapshot(snapshot: &RoomsSnapshot) -> Self {
        Self::RoomsSnapshot(
            snapshot
                .iter()
                .map(|(room_id, room)| (room_id.to_string(), RoomSnapshotDto::from(room)))
                .collect(),
        )
    }

    /// Encode as a text frame
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
