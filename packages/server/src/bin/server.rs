//! Roomclock server.
//!
//! Serves the realtime room protocol on `/ws` and a small read-only HTTP API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomclock-server -- --port 3001
//! ```

use clap::Parser;
use roomclock_server::ServerConfig;
use roomclock_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = roomclock_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
