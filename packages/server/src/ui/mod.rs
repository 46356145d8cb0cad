//! Realtime session coordinator: WebSocket/HTTP surface, broadcast fan-out and the tick loop.

pub mod broadcast;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;
pub mod ticker;

pub use handler::websocket::dispatch;
pub use router::create_router;
pub use runner::run;

#[cfg(test)]
mod test_support;
