//! Domain layer for the room timer.
//!
//! This module contains the room state machine and the registry that owns every room.
//! It is independent of data transfer objects (DTOs) and the transport.

pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{DEFAULT_DURATION_SECS, Room, RoomCommand, RoomTick};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use registry::{RoomRegistry, RoomUpdate, RoomsSnapshot, TickChange, TickReport};
pub use repository::{ConnectionRepository, RoomRepository};
pub use value_object::{ConnectionId, DEFAULT_ROOM_ID, RoomId, Timestamp};
