//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルーム ID の正規化、ルームの遅延作成、購読の置き換え
//!
//! ### なぜこのテストが必要か
//! - 不正なルーム ID は拒否せずデフォルトルームに置き換える必要がある
//! - 再 join で以前のルームの更新が届かなくなることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しいルームへの参加（作成される）
//! - エッジケース：ルーム ID が未指定・空白・文字列以外
//! - 異常系：未登録の接続からの参加

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{ConnectionId, ConnectionRepository, RoomId, RoomRepository, RoomUpdate};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    rooms: Arc<dyn RoomRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>, connections: Arc<dyn ConnectionRepository>) -> Self {
        Self { rooms, connections }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続
    /// * `raw_room_id` - クライアントが送ったルーム ID（文字列以外・空白はデフォルトルーム）
    ///
    /// # Returns
    ///
    /// * `Ok(RoomUpdate)` - 参加したルームの状態と全ルームのスナップショット
    /// * `Err(JoinRoomError)` - 接続が登録されていない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        raw_room_id: &Value,
    ) -> Result<RoomUpdate, JoinRoomError> {
        let room_id = RoomId::resolve(raw_room_id.as_str(), &self.rooms.default_room_id());

        // 1. 購読を置き換える（未登録の接続ならルームは作成しない）
        let previous = self
            .connections
            .subscribe(connection_id, room_id.clone())
            .await
            .map_err(|_| JoinRoomError::ConnectionNotFound(connection_id.to_string()))?;
        if let Some(previous) = previous
            && previous != room_id
        {
            tracing::debug!(
                "Connection '{}' left room '{}' for '{}'",
                connection_id,
                previous,
                room_id
            );
        }

        // 2. ルームを取得（なければ作成）
        Ok(self.rooms.join(&room_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, DEFAULT_ROOM_ID, RepositoryError, Timestamp},
        domain::repository::{MockConnectionRepository, MockRoomRepository},
        infrastructure::repository::{InMemoryConnectionRepository, InMemoryRoomRepository},
    };
    use serde_json::json;
    use tokio::sync::mpsc;

    async fn setup() -> (
        JoinRoomUseCase,
        Arc<InMemoryConnectionRepository>,
        ConnectionId,
    ) {
        let rooms = Arc::new(InMemoryRoomRepository::default());
        let connections = Arc::new(InMemoryConnectionRepository::new());
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = ConnectionIdFactory::generate();
        connections
            .register(id.clone(), tx, Timestamp::now())
            .await
            .unwrap();
        (
            JoinRoomUseCase::new(rooms, connections.clone()),
            connections,
            id,
        )
    }

    #[tokio::test]
    async fn test_join_creates_room_lazily() {
        // テスト項目: 新しいルームに参加するとデフォルト状態で作成され、スナップショットに現れる
        // given (前提条件):
        let (usecase, connections, id) = setup().await;

        // when (操作):
        let update = usecase.execute(&id, &json!("room-7")).await.unwrap();

        // then (期待する結果):
        assert_eq!(update.room_id.as_str(), "room-7");
        assert_eq!(update.room.time_left, 3600);
        assert_eq!(update.room.hint, "");
        assert!(!update.room.is_running);
        assert!(update.snapshot.get(&update.room_id).is_some());
        assert_eq!(connections.count_subscribers(&update.room_id).await, 1);
    }

    #[tokio::test]
    async fn test_join_malformed_room_id_uses_default() {
        // テスト項目: 未指定・空白・文字列以外のルーム ID はデフォルトルームになる
        // given (前提条件):
        let (usecase, _connections, id) = setup().await;

        for raw in [Value::Null, json!("   "), json!(42), json!({"roomId": "x"})] {
            // when (操作):
            let update = usecase.execute(&id, &raw).await.unwrap();

            // then (期待する結果):
            assert_eq!(update.room_id.as_str(), DEFAULT_ROOM_ID);
            assert_eq!(update.snapshot.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_rejoin_replaces_subscription() {
        // テスト項目: 別のルームに再 join すると購読が置き換わる
        // given (前提条件):
        let (usecase, connections, id) = setup().await;
        usecase.execute(&id, &json!("a")).await.unwrap();

        // when (操作):
        usecase.execute(&id, &json!("b")).await.unwrap();

        // then (期待する結果):
        let a = RoomId::new("a".to_string()).unwrap();
        let b = RoomId::new("b".to_string()).unwrap();
        assert_eq!(connections.count_subscribers(&a).await, 0);
        assert_eq!(connections.count_subscribers(&b).await, 1);
    }

    #[tokio::test]
    async fn test_join_unknown_connection_does_not_create_room() {
        // テスト項目: 未登録の接続からの参加はエラーになり、ルームも作成されない
        // given (前提条件):
        let mut connections = MockConnectionRepository::new();
        connections
            .expect_subscribe()
            .times(1)
            .returning(|id, _| Err(RepositoryError::ConnectionNotFound(id.to_string())));
        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_default_room_id()
            .returning(RoomId::default);
        rooms.expect_join().never();
        let usecase = JoinRoomUseCase::new(Arc::new(rooms), Arc::new(connections));
        let id = ConnectionIdFactory::generate();

        // when (操作):
        let result = usecase.execute(&id, &json!("room-9")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(JoinRoomError::ConnectionNotFound(id.to_string()))
        );
    }
}
