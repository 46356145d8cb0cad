//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use thiserror::Error;

use crate::domain::{DEFAULT_DURATION_SECS, DEFAULT_ROOM_ID, RoomId};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be positive")]
    ZeroTickInterval,

    #[error("default duration must be positive")]
    ZeroDuration,

    #[error("default room id cannot be empty")]
    EmptyDefaultRoom,
}

/// Realtime countdown timer and hint broadcaster
#[derive(Debug, Clone, Parser)]
#[command(name = "roomclock-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Tick period in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    pub tick_interval_ms: u64,

    /// Countdown length of new and reset rooms, in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    pub default_duration: u32,

    /// Room used when a client names none; created at start-up
    #[arg(long, default_value = DEFAULT_ROOM_ID)]
    pub default_room: String,

    /// JSON file with the hint catalog served at /api/hints
    #[arg(long)]
    pub hints_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            default_duration: DEFAULT_DURATION_SECS,
            default_room: DEFAULT_ROOM_ID.to_string(),
            hints_file: None,
        }
    }
}

impl ServerConfig {
    /// Check the configuration and return the default room id
    pub fn validate(&self) -> Result<RoomId, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.default_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        RoomId::new(self.default_room.clone()).map_err(|_| ConfigError::EmptyDefaultRoom)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
