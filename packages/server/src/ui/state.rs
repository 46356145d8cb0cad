//! Server state shared by every handler.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    domain::{RoomRegistry, RoomRepository},
    infrastructure::{
        hint_catalog::HintCatalog,
        repository::{InMemoryConnectionRepository, InMemoryRoomRepository},
    },
};

/// Shared application state
pub struct AppState {
    /// Repository（ルームの状態）
    pub rooms: Arc<dyn RoomRepository>,
    /// Live connections, their subscriptions and outbound channels
    pub connections: Arc<InMemoryConnectionRepository>,
    /// Static hint catalog, if one was configured
    pub hints: Option<Arc<HintCatalog>>,
    /// Held from a registry change until its events are queued, so every connection
    /// receives changes in the order they were committed.
    pub sequence: Mutex<()>,
}

impl AppState {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        connections: Arc<InMemoryConnectionRepository>,
        hints: Option<Arc<HintCatalog>>,
    ) -> Self {
        Self {
            rooms,
            connections,
            hints,
            sequence: Mutex::new(()),
        }
    }

    /// In-memory state around the given registry, without a hint catalog
    pub fn in_memory(registry: RoomRegistry) -> Self {
        Self::new(
            Arc::new(InMemoryRoomRepository::new(registry)),
            Arc::new(InMemoryConnectionRepository::new()),
            None,
        )
    }
}
