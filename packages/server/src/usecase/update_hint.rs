//! UseCase: ヒント更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateHintUseCase::execute() メソッド
//! - `{roomId, hint}` ペイロードの解釈とヒントの更新
//!
//! ### なぜこのテストが必要か
//! - オブジェクトでないペイロードは状態を変えずに破棄する必要がある
//! - 文字列でないヒントは拒否せず空文字にする
//!
//! ### どのような状況を想定しているか
//! - 正常系：ヒントの設定
//! - 異常系：オブジェクトでないペイロード
//! - エッジケース：hint が文字列以外、roomId が未指定

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{RoomCommand, RoomId, RoomRepository, RoomUpdate};

use super::error::UpdateHintError;

/// ヒント更新のユースケース
pub struct UpdateHintUseCase {
    rooms: Arc<dyn RoomRepository>,
}

impl UpdateHintUseCase {
    /// 新しい UpdateHintUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    /// ヒント更新を実行
    ///
    /// # Arguments
    ///
    /// * `payload` - `{roomId, hint}` 形式のオブジェクト
    ///
    /// # Returns
    ///
    /// * `Ok(RoomUpdate)` - 更新後のルームと全ルームのスナップショット
    /// * `Err(UpdateHintError::MalformedPayload)` - ペイロードがオブジェクトでない（状態は変わらない）
    pub async fn execute(&self, payload: &Value) -> Result<RoomUpdate, UpdateHintError> {
        let fields = payload
            .as_object()
            .ok_or(UpdateHintError::MalformedPayload)?;

        let raw_room_id = fields.get("roomId").and_then(Value::as_str);
        let room_id = RoomId::resolve(raw_room_id, &self.rooms.default_room_id());
        let hint = fields
            .get("hint")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let update = self
            .rooms
            .apply(&room_id, RoomCommand::SetHint(hint))
            .await;
        tracing::info!("Room '{}' hint updated: {:?}", update.room_id, update.room.hint);
        Ok(update)
    }
}
