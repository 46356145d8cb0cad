//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 接続と購読の削除
//!
//! ### なぜこのテストが必要か
//! - 切断後の接続にブロードキャストが送られ続けないことを保証
//! - 切断はルームの状態を変えない（通知もしない）
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム購読中の接続の切断
//! - 異常系：未登録の接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository, RoomId};

use super::error::DisconnectError;

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    connections: Arc<dyn ConnectionRepository>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(connections: Arc<dyn ConnectionRepository>) -> Self {
        Self { connections }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Option<RoomId>)` - 購読していたルーム
    /// * `Err(DisconnectError)` - 接続が登録されていない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<RoomId>, DisconnectError> {
        self.connections
            .remove(connection_id)
            .await
            .map_err(|_| DisconnectError::ConnectionNotFound(connection_id.to_string()))
    }
}
