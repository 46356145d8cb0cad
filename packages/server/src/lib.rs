//! Multi-room countdown timer and hint broadcaster.
//!
//! Controllers start, pause and reset per-room countdowns and push hints; players and
//! dashboards follow the authoritative server state over WebSocket. Every running room
//! is advanced by a single server-side tick once per second.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run as run_server;
