//! The tick loop: a fixed-period timer advancing every running room.
//!
//! No drift compensation: missed periods are not caught up, so wall-clock time and
//! counted seconds may diverge slightly under load.

use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{
    domain::TickReport,
    ui::{broadcast::broadcast_tick, state::AppState},
    usecase::TickRoomsUseCase,
};

/// Spawn the tick loop. Abort the returned handle to stop it.
pub fn spawn_ticker(state: Arc<AppState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        // first tick one full period after start
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!("Tick loop started (period: {:?})", period);

        loop {
            interval.tick().await;
            tick_once(&state).await;
        }
    })
}

/// Run one tick and broadcast its outcome
pub async fn tick_once(state: &AppState) -> TickReport {
    let _sequence = state.sequence.lock().await;
    let report = TickRoomsUseCase::new(state.rooms.clone()).execute().await;
    broadcast_tick(&state.connections, &report).await;
    report
}
