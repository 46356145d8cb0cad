//! Test fixtures: run the real server binary on a fixed port.

#![allow(dead_code)]

use std::{
    net::TcpStream,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream as TokioTcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsClient = WebSocketStream<MaybeTlsStream<TokioTcpStream>>;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Server process killed on drop
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        Self::start_with_args(port, &[])
    }

    pub fn start_with_args(port: u16, args: &[&str]) -> Self {
        let child = Command::new(env!("CARGO_BIN_EXE_roomclock-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn server");

        let server = Self { child, port };
        server.wait_until_ready();
        server
    }

    fn wait_until_ready(&self) {
        let deadline = Instant::now() + STARTUP_TIMEOUT;
        while Instant::now() < deadline {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("Server did not start on port {}", self.port);
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }

    pub async fn connect(&self) -> WsClient {
        let (ws, _) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect WebSocket");
        ws
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Send one `{event, data}` frame
pub async fn send_event(ws: &mut WsClient, event: &str, data: Value) {
    let frame = serde_json::json!({ "event": event, "data": data });
    ws.send(Message::text(frame.to_string()))
        .await
        .expect("Failed to send frame");
}

/// Send a raw text frame
pub async fn send_raw(ws: &mut WsClient, text: &str) {
    ws.send(Message::text(text.to_string()))
        .await
        .expect("Failed to send frame");
}

/// Read frames until one with the given event name arrives and return its data
pub async fn next_event(ws: &mut WsClient, event: &str) -> Value {
    next_matching(ws, event, |_| true).await
}

/// Read frames until one with the given event name satisfies `predicate`
pub async fn next_matching(
    ws: &mut WsClient,
    event: &str,
    predicate: impl Fn(&Value) -> bool,
) -> Value {
    let read = async {
        while let Some(msg) = ws.next().await {
            let msg = msg.expect("WebSocket error");
            let Ok(text) = msg.to_text() else {
                continue;
            };
            let Ok(frame) = serde_json::from_str::<Value>(text) else {
                continue;
            };
            if frame["event"] == event && predicate(&frame["data"]) {
                return frame["data"].clone();
            }
        }
        panic!("Connection closed while waiting for '{}'", event);
    };

    tokio::time::timeout(EVENT_TIMEOUT, read)
        .await
        .unwrap_or_else(|_| panic!("Timed out waiting for '{}'", event))
}
