//! UseCase: 1 秒ごとの tick 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - TickRoomsUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 実行中のルームだけが 1 秒ずつ減り、0 で停止することを保証
//! - 変化がなくても全ルームのスナップショットが返る（毎 tick 送信するため）

use std::sync::Arc;

use crate::domain::{RoomRepository, TickReport};

/// tick のユースケース
pub struct TickRoomsUseCase {
    rooms: Arc<dyn RoomRepository>,
}

impl TickRoomsUseCase {
    /// 新しい TickRoomsUseCase を作成
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    /// 実行中の全ルームを 1 秒進める
    pub async fn execute(&self) -> TickReport {
        let report = self.rooms.tick().await;
        for change in report.changes.iter().filter(|change| change.stopped) {
            tracing::info!("Room '{}' reached zero and stopped", change.room_id);
        }
        tracing::trace!(
            "Tick: {} running room(s) of {}",
            report.changes.len(),
            report.snapshot.len()
        );
        report
    }
}
