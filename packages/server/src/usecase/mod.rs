//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 各ユースケースはブロードキャストすべき状態を返すだけで、送信は UI 層が行います。

pub mod connect_client;
pub mod control_room;
pub mod disconnect_client;
pub mod error;
pub mod join_room;
pub mod tick_rooms;
pub mod update_hint;

pub use connect_client::ConnectClientUseCase;
pub use control_room::{ControlRoomUseCase, RoomControl};
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{ConnectError, DisconnectError, JoinRoomError, UpdateHintError};
pub use join_room::JoinRoomUseCase;
pub use tick_rooms::TickRoomsUseCase;
pub use update_hint::UpdateHintUseCase;
