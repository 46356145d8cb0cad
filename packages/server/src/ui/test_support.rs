//! Helpers for coordinator tests: fake connections backed by plain channels.

use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, ConnectionRepository, Timestamp},
    ui::state::AppState,
};

/// Register a connection and return the receiving end of its outbound channel
pub async fn connect(state: &AppState) -> (ConnectionId, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let id = ConnectionIdFactory::generate();
    state
        .connections
        .register(id.clone(), tx, Timestamp::now())
        .await
        .unwrap();
    (id, rx)
}

/// Every frame queued so far, decoded
pub fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<Value> {
    let mut frames = Vec::new();
    while let Ok(text) = rx.try_recv() {
        frames.push(serde_json::from_str(&text).unwrap());
    }
    frames
}

/// Event names of the given frames, in order
pub fn event_names(frames: &[Value]) -> Vec<&str> {
    frames
        .iter()
        .map(|frame| frame["event"].as_str().unwrap())
        .collect()
}
