//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - 接続の登録と、接続直後に全員へ送るスナップショットの取得
//!
//! ### なぜこのテストが必要か
//! - 登録されていない接続にはブロードキャストが届かない
//! - 接続直後のダッシュボードが全ルームを表示できることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続
//! - 異常系：同じ接続 ID の二重登録

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{ConnectionId, ConnectionRepository, RoomRepository, RoomsSnapshot, Timestamp};

use super::error::ConnectError;

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    rooms: Arc<dyn RoomRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>, connections: Arc<dyn ConnectionRepository>) -> Self {
        Self { rooms, connections }
    }

    /// 接続を登録する
    ///
    /// # Returns
    ///
    /// * `Ok(RoomsSnapshot)` - 全接続に送るスナップショット
    /// * `Err(ConnectError)` - 登録失敗
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
    ) -> Result<RoomsSnapshot, ConnectError> {
        let id = connection_id.to_string();
        self.connections
            .register(connection_id, sender, Timestamp::now())
            .await
            .map_err(|_| ConnectError::DuplicateConnectionId(id))?;

        Ok(self.rooms.snapshot().await)
    }
}
