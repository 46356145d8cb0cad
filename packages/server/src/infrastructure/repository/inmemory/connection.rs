//! InMemory Connection Repository 実装
//!
//! 接続中のクライアントと、それぞれが購読しているルームを管理します。
//! 各接続は専用の unbounded チャンネルを持ち、送信はキューに積むだけなので
//! 遅いクライアントが tick や他の接続を止めることはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{ConnectionId, ConnectionRepository, RepositoryError, RoomId, Timestamp};

/// Client connection information
pub struct ClientInfo {
    /// Message sender channel
    pub sender: UnboundedSender<String>,
    /// Room this connection receives per-room updates for
    pub room_id: Option<RoomId>,
    /// Timestamp when connected
    pub connected_at: Timestamp,
}

/// インメモリ Connection Repository 実装
#[derive(Default)]
pub struct InMemoryConnectionRepository {
    /// 接続中のクライアント情報（WebSocket sender を含む）
    clients: Mutex<HashMap<ConnectionId, ClientInfo>>,
}

impl InMemoryConnectionRepository {
    /// 新しい InMemoryConnectionRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 つの接続だけに送信
    ///
    /// 送信できた場合 true を返す
    pub async fn send_to(&self, connection_id: &ConnectionId, message: &str) -> bool {
        let clients = self.clients.lock().await;
        match clients.get(connection_id) {
            Some(info) => deliver(connection_id, info, message),
            None => {
                tracing::warn!("Connection '{}' is not registered", connection_id);
                false
            }
        }
    }

    /// ルームを購読している全接続に送信
    ///
    /// 送信できた接続数を返す
    pub async fn send_to_room(&self, room_id: &RoomId, message: &str) -> usize {
        let clients = self.clients.lock().await;
        clients
            .iter()
            .filter(|(_, info)| info.room_id.as_ref() == Some(room_id))
            .filter(|(id, info)| deliver(id, info, message))
            .count()
    }

    /// 購読状況に関係なく全接続に送信
    ///
    /// 送信できた接続数を返す
    pub async fn send_to_all(&self, message: &str) -> usize {
        let clients = self.clients.lock().await;
        clients
            .iter()
            .filter(|(id, info)| deliver(id, info, message))
            .count()
    }

    /// ルームを購読している接続と接続時刻（接続が古い順）
    pub async fn subscribers(&self, room_id: &RoomId) -> Vec<(ConnectionId, Timestamp)> {
        let clients = self.clients.lock().await;
        let mut subscribers: Vec<_> = clients
            .iter()
            .filter(|(_, info)| info.room_id.as_ref() == Some(room_id))
            .map(|(id, info)| (id.clone(), info.connected_at))
            .collect();
        subscribers.sort_by(|(a_id, a_at), (b_id, b_at)| {
            a_at.cmp(b_at).then_with(|| a_id.as_str().cmp(b_id.as_str()))
        });
        subscribers
    }
}

fn deliver(connection_id: &ConnectionId, info: &ClientInfo, message: &str) -> bool {
    if info.sender.send(message.to_string()).is_err() {
        tracing::warn!("Failed to send message to connection '{}'", connection_id);
        return false;
    }
    true
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn register(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut clients = self.clients.lock().await;
        if clients.contains_key(&connection_id) {
            return Err(RepositoryError::DuplicateConnection(
                connection_id.to_string(),
            ));
        }
        clients.insert(
            connection_id,
            ClientInfo {
                sender,
                room_id: None,
                connected_at,
            },
        );
        Ok(())
    }

    async fn subscribe(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
    ) -> Result<Option<RoomId>, RepositoryError> {
        let mut clients = self.clients.lock().await;
        let info = clients
            .get_mut(connection_id)
            .ok_or_else(|| RepositoryError::ConnectionNotFound(connection_id.to_string()))?;
        Ok(info.room_id.replace(room_id))
    }

    async fn remove(&self, connection_id: &ConnectionId) -> Result<Option<RoomId>, RepositoryError> {
        let mut clients = self.clients.lock().await;
        clients
            .remove(connection_id)
            .map(|info| info.room_id)
            .ok_or_else(|| RepositoryError::ConnectionNotFound(connection_id.to_string()))
    }

    async fn count_subscribers(&self, room_id: &RoomId) -> usize {
        let clients = self.clients.lock().await;
        clients
            .values()
            .filter(|info| info.room_id.as_ref() == Some(room_id))
            .count()
    }

    async fn count_connections(&self) -> usize {
        let clients = self.clients.lock().await;
        clients.len()
    }
}
