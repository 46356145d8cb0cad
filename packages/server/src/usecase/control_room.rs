//! UseCase: タイマー操作（開始・一時停止・リセット）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ControlRoomUseCase::execute() メソッド
//! - startGame / pauseGame / resetGame に対応する状態遷移
//!
//! ### なぜこのテストが必要か
//! - 操作は冪等で、状態が変わらなくても毎回ブロードキャスト対象の RoomUpdate を返す
//! - 他のルームに影響しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：開始・一時停止・リセット
//! - エッジケース：停止中のルームの一時停止、残り 0 秒での開始

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{RoomCommand, RoomId, RoomRepository, RoomUpdate};

/// コントローラーによるタイマー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomControl {
    Start,
    Pause,
    Reset,
}

impl From<RoomControl> for RoomCommand {
    fn from(control: RoomControl) -> Self {
        match control {
            RoomControl::Start => RoomCommand::Start,
            RoomControl::Pause => RoomCommand::Pause,
            RoomControl::Reset => RoomCommand::Reset,
        }
    }
}

/// タイマー操作のユースケース
pub struct ControlRoomUseCase {
    rooms: Arc<dyn RoomRepository>,
}

impl ControlRoomUseCase {
    /// 新しい ControlRoomUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    /// タイマー操作を実行
    ///
    /// 前提条件のチェックはしない（残り 0 秒でも開始できる）。
    ///
    /// # Arguments
    ///
    /// * `raw_room_id` - クライアントが送ったルーム ID（文字列以外・空白はデフォルトルーム）
    /// * `control` - 操作
    pub async fn execute(&self, raw_room_id: &Value, control: RoomControl) -> RoomUpdate {
        let room_id = RoomId::resolve(raw_room_id.as_str(), &self.rooms.default_room_id());
        let update = self.rooms.apply(&room_id, control.into()).await;
        tracing::info!(
            "Room '{}' {:?}: time_left={} running={}",
            update.room_id,
            control,
            update.room.time_left,
            update.room.is_running
        );
        update
    }
}
