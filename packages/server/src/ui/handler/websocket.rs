//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory},
    infrastructure::dto::websocket::ClientEvent,
    ui::{
        broadcast::{broadcast_room_update, broadcast_snapshot, send_room_state},
        state::AppState,
    },
    usecase::{
        ConnectClientUseCase, ControlRoomUseCase, DisconnectClientUseCase, JoinRoomUseCase,
        RoomControl, UpdateHintUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();

    // Create a channel for this connection to receive broadcasts
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    {
        let _sequence = state.sequence.lock().await;
        let connect_usecase =
            ConnectClientUseCase::new(state.rooms.clone(), state.connections.clone());
        let snapshot = match connect_usecase.execute(connection_id.clone(), tx).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Failed to register connection: {}", e);
                return;
            }
        };
        tracing::info!("Connection '{}' opened", connection_id);

        // A new dashboard sees every room right away
        broadcast_snapshot(&state.connections, &snapshot).await;
    }

    let (mut sender, mut receiver) = socket.split();

    let connection_id_clone = connection_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match ClientEvent::parse(text.as_str()) {
                    Ok(event) => dispatch(&state_clone, &connection_id_clone, event).await,
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring frame from '{}': {}",
                            connection_id_clone,
                            e
                        );
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward broadcasts to this connection
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let disconnect_usecase = DisconnectClientUseCase::new(state.connections.clone());
    match disconnect_usecase.execute(&connection_id).await {
        Ok(Some(room_id)) => {
            tracing::info!("Connection '{}' closed (room '{}')", connection_id, room_id);
        }
        Ok(None) => tracing::info!("Connection '{}' closed", connection_id),
        Err(e) => tracing::warn!("Failed to disconnect: {}", e),
    }
}

/// Handle one inbound event to completion: mutate the registry, then broadcast.
///
/// Runs under `AppState::sequence`, like the tick.
pub async fn dispatch(state: &AppState, connection_id: &ConnectionId, event: ClientEvent) {
    tracing::debug!("Connection '{}' sent {}", connection_id, event.name());
    let _sequence = state.sequence.lock().await;

    match event {
        ClientEvent::JoinRoom(raw_room_id) => {
            let usecase = JoinRoomUseCase::new(state.rooms.clone(), state.connections.clone());
            match usecase.execute(connection_id, &raw_room_id).await {
                Ok(update) => {
                    tracing::info!(
                        "Connection '{}' joined room '{}'",
                        connection_id,
                        update.room_id
                    );
                    send_room_state(&state.connections, connection_id, &update).await;
                    broadcast_snapshot(&state.connections, &update.snapshot).await;
                }
                Err(e) => tracing::warn!("Failed to join room: {}", e),
            }
        }
        ClientEvent::StartGame(raw_room_id) => {
            control(state, &raw_room_id, RoomControl::Start).await;
        }
        ClientEvent::PauseGame(raw_room_id) => {
            control(state, &raw_room_id, RoomControl::Pause).await;
        }
        ClientEvent::ResetGame(raw_room_id) => {
            control(state, &raw_room_id, RoomControl::Reset).await;
        }
        ClientEvent::UpdateHint(payload) => {
            let usecase = UpdateHintUseCase::new(state.rooms.clone());
            match usecase.execute(&payload).await {
                Ok(update) => broadcast_room_update(&state.connections, &update).await,
                Err(e) => {
                    tracing::debug!("Dropping updateHint from '{}': {}", connection_id, e);
                }
            }
        }
    }
}

async fn control(state: &AppState, raw_room_id: &serde_json::Value, control: RoomControl) {
    let usecase = ControlRoomUseCase::new(state.rooms.clone());
    let update = usecase.execute(raw_room_id, control).await;
    broadcast_room_update(&state.connections, &update).await;
}
