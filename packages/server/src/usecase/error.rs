//! UseCase 層のエラー定義

use thiserror::Error;

/// 接続処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Connection '{0}' is already registered")]
    DuplicateConnectionId(String),
}

/// ルーム参加処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    #[error("Connection '{0}' is not registered")]
    ConnectionNotFound(String),
}

/// ヒント更新処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateHintError {
    /// ペイロードがオブジェクトではない（黙って破棄する）
    #[error("updateHint payload must be an object")]
    MalformedPayload,
}

/// 切断処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectError {
    #[error("Connection '{0}' is not registered")]
    ConnectionNotFound(String),
}
