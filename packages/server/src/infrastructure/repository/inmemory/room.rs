//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! RoomRegistry 全体を 1 つの Mutex で保護します。
//!
//! ルーム数も更新頻度も小さいため、ルームごとのロックではなくグローバルロックを採用しています。
//! 状態遷移とスナップショットの組み立ては同じロックの中で行い、送信はロック解放後に行います。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    RepositoryError, Room, RoomCommand, RoomId, RoomRegistry, RoomRepository, RoomUpdate,
    RoomsSnapshot, TickReport,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// ルームの状態（唯一の所有者）
    registry: Mutex<RoomRegistry>,
    /// デフォルトのルーム ID（ロックなしで参照するためのコピー）
    default_room_id: RoomId,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(registry: RoomRegistry) -> Self {
        let default_room_id = registry.default_room_id().clone();
        Self {
            registry: Mutex::new(registry),
            default_room_id,
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new(RoomRegistry::default())
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    fn default_room_id(&self) -> RoomId {
        self.default_room_id.clone()
    }

    async fn join(&self, room_id: &RoomId) -> RoomUpdate {
        let mut registry = self.registry.lock().await;
        let room = registry.get_or_create(room_id).clone();
        RoomUpdate {
            room_id: room_id.clone(),
            room,
            snapshot: registry.snapshot(),
        }
    }

    async fn apply(&self, room_id: &RoomId, command: RoomCommand) -> RoomUpdate {
        let mut registry = self.registry.lock().await;
        let room = registry.apply(room_id, command);
        RoomUpdate {
            room_id: room_id.clone(),
            room,
            snapshot: registry.snapshot(),
        }
    }

    async fn tick(&self) -> TickReport {
        let mut registry = self.registry.lock().await;
        let changes = registry.tick();
        TickReport {
            changes,
            snapshot: registry.snapshot(),
        }
    }

    async fn snapshot(&self) -> RoomsSnapshot {
        let registry = self.registry.lock().await;
        registry.snapshot()
    }

    async fn find(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let registry = self.registry.lock().await;
        registry
            .get(room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.to_string()))
    }
}
