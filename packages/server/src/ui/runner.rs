//! Server runner: builds the state, starts the tick loop and serves until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    domain::RoomRegistry,
    error::ServerError,
    infrastructure::hint_catalog::HintCatalog,
    ui::{router::create_router, signal::shutdown_signal, state::AppState, ticker::spawn_ticker},
};

/// Run the server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let default_room_id = config.validate()?;

    let hints = match &config.hints_file {
        Some(path) => Some(Arc::new(HintCatalog::load(path).await?)),
        None => None,
    };

    let registry = RoomRegistry::new(default_room_id, config.default_duration);
    let mut state = AppState::in_memory(registry);
    state.hints = hints;
    let state = Arc::new(state);

    let ticker = spawn_ticker(state.clone(), config.tick_interval());
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Roomclock server listening on {}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    ticker.abort();
    tracing::info!("Tick loop stopped");

    result.map_err(ServerError::Serve)
}
