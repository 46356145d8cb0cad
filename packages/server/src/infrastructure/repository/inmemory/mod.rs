//! InMemory Repository 実装

mod connection;
mod room;

pub use connection::{ClientInfo, InMemoryConnectionRepository};
pub use room::InMemoryRoomRepository;
