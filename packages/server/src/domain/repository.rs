//! Repository traits.
//!
//! The use case layer depends on these traits, the infrastructure layer implements them.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::{Room, RoomCommand},
    error::RepositoryError,
    registry::{RoomUpdate, RoomsSnapshot, TickReport},
    value_object::{ConnectionId, RoomId, Timestamp},
};

/// Access to the room registry.
///
/// Every method is one serialized step: the returned room copy and snapshot
/// describe the same point in time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room id substituted for missing or blank client input
    fn default_room_id(&self) -> RoomId;

    /// Get or create a room and return it with a fresh snapshot
    async fn join(&self, room_id: &RoomId) -> RoomUpdate;

    /// Apply a command to a room (creating it if needed)
    async fn apply(&self, room_id: &RoomId, command: RoomCommand) -> RoomUpdate;

    /// Advance every running room by one second
    async fn tick(&self) -> TickReport;

    /// Copy of every room
    async fn snapshot(&self) -> RoomsSnapshot;

    /// Look up a room without creating it
    async fn find(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;
}

/// Live connections and the room each one is subscribed to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Register a new connection with its outbound channel
    async fn register(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RepositoryError>;

    /// Subscribe a connection to a room, replacing any previous subscription.
    ///
    /// Returns the previously subscribed room.
    async fn subscribe(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
    ) -> Result<Option<RoomId>, RepositoryError>;

    /// Drop a connection and its subscription.
    ///
    /// Returns the room it was subscribed to.
    async fn remove(&self, connection_id: &ConnectionId) -> Result<Option<RoomId>, RepositoryError>;

    /// Number of connections subscribed to a room
    async fn count_subscribers(&self, room_id: &RoomId) -> usize;

    /// Number of live connections
    async fn count_connections(&self) -> usize;
}
