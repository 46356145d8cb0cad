//! Core domain models for the room timer.

use serde::{Deserialize, Serialize};

use super::value_object::Timestamp;

/// Default countdown length of a room, in seconds (one hour)
pub const DEFAULT_DURATION_SECS: u32 = 60 * 60;

/// State of a single room: a countdown plus the hint currently shown to players.
///
/// `time_left` never goes below zero and a tick that reaches zero stops the room.
/// `start` is accepted at zero; the next tick stops the room again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Remaining seconds
    pub time_left: u32,
    /// Hint shown to players, empty when none
    pub hint: String,
    /// Whether the countdown is advancing
    pub is_running: bool,
    /// Countdown length restored by `reset`
    pub duration: u32,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

/// A state transition requested by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomCommand {
    Start,
    Pause,
    Reset,
    SetHint(String),
}

/// Outcome of one tick on a running room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTick {
    /// Remaining seconds after the tick
    pub time_left: u32,
    /// The tick reached zero and stopped the room
    pub stopped: bool,
}

impl Room {
    /// Create a paused room with a full countdown and no hint
    pub fn new(duration: u32, created_at: Timestamp) -> Self {
        Self {
            time_left: duration,
            hint: String::new(),
            is_running: false,
            duration,
            created_at,
        }
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Restore the full countdown, clear the hint and stop the room
    pub fn reset(&mut self) {
        self.time_left = self.duration;
        self.hint.clear();
        self.is_running = false;
    }

    pub fn set_hint(&mut self, hint: String) {
        self.hint = hint;
    }

    /// Apply a controller command
    pub fn apply(&mut self, command: RoomCommand) {
        match command {
            RoomCommand::Start => self.start(),
            RoomCommand::Pause => self.pause(),
            RoomCommand::Reset => self.reset(),
            RoomCommand::SetHint(hint) => self.set_hint(hint),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `None` for a paused room (nothing changed).
    pub fn tick(&mut self) -> Option<RoomTick> {
        if !self.is_running {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        let stopped = self.time_left == 0;
        if stopped {
            self.is_running = false;
        }

        Some(RoomTick {
            time_left: self.time_left,
            stopped,
        })
    }
}
