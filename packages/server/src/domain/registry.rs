//! Room registry: the single owner of every room's state.
//!
//! The registry is plain data with no locking of its own; the repository layer puts it
//! behind one lock so that a transition and the snapshot composed after it are observed
//! as one point in time.

use std::collections::{BTreeMap, HashMap};

use super::{
    entity::{Room, RoomCommand},
    value_object::{RoomId, Timestamp},
};

/// Immutable copy of every room, keyed by room id.
///
/// Owns its rooms; mutating the snapshot never reaches the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomsSnapshot(BTreeMap<RoomId, Room>);

impl RoomsSnapshot {
    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.0.get(room_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoomId, &Room)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for RoomsSnapshot {
    type Item = (RoomId, Room);
    type IntoIter = std::collections::btree_map::IntoIter<RoomId, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of resolving or mutating one room: its new state and the snapshot taken right after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUpdate {
    pub room_id: RoomId,
    pub room: Room,
    pub snapshot: RoomsSnapshot,
}

/// One running room advanced by a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickChange {
    pub room_id: RoomId,
    pub time_left: u32,
    /// The room reached zero and stopped during this tick
    pub stopped: bool,
}

/// Result of one tick over the whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Changed rooms, ordered by room id
    pub changes: Vec<TickChange>,
    /// Snapshot of the whole registry after the tick
    pub snapshot: RoomsSnapshot,
}

/// Mapping from room id to room state.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    default_room_id: RoomId,
    default_duration: u32,
}

impl RoomRegistry {
    /// Create a registry holding only the default room.
    pub fn new(default_room_id: RoomId, default_duration: u32) -> Self {
        let mut registry = Self {
            rooms: HashMap::new(),
            default_room_id,
            default_duration,
        };
        let default_room_id = registry.default_room_id.clone();
        registry.get_or_create(&default_room_id);
        registry
    }

    /// Room id substituted for missing or blank client input.
    pub fn default_room_id(&self) -> &RoomId {
        &self.default_room_id
    }

    /// Look up a room, creating it with default state on first reference.
    pub fn get_or_create(&mut self, room_id: &RoomId) -> &Room {
        self.entry(room_id)
    }

    fn entry(&mut self, room_id: &RoomId) -> &mut Room {
        let default_duration = self.default_duration;
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!("Room '{}' created", room_id);
            Room::new(default_duration, Timestamp::now())
        })
    }

    /// Look up a room without creating it.
    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Apply a command to a room (creating it if needed) and return a copy of its new state.
    pub fn apply(&mut self, room_id: &RoomId, command: RoomCommand) -> Room {
        let room = self.entry(room_id);
        room.apply(command);
        room.clone()
    }

    pub fn start(&mut self, room_id: &RoomId) -> Room {
        self.apply(room_id, RoomCommand::Start)
    }

    pub fn pause(&mut self, room_id: &RoomId) -> Room {
        self.apply(room_id, RoomCommand::Pause)
    }

    pub fn reset(&mut self, room_id: &RoomId) -> Room {
        self.apply(room_id, RoomCommand::Reset)
    }

    pub fn set_hint(&mut self, room_id: &RoomId, hint: String) -> Room {
        self.apply(room_id, RoomCommand::SetHint(hint))
    }

    /// Advance every running room by one second.
    ///
    /// Returns the rooms whose state changed, ordered by room id.
    pub fn tick(&mut self) -> Vec<TickChange> {
        let mut changes: Vec<TickChange> = self
            .rooms
            .iter_mut()
            .filter_map(|(room_id, room)| {
                room.tick().map(|tick| TickChange {
                    room_id: room_id.clone(),
                    time_left: tick.time_left,
                    stopped: tick.stopped,
                })
            })
            .collect();
        changes.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        changes
    }

    /// Copy of every room's current state.
    pub fn snapshot(&self) -> RoomsSnapshot {
        RoomsSnapshot(
            self.rooms
                .iter()
                .map(|(room_id, room)| (room_id.clone(), room.clone()))
                .collect(),
        )
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(RoomId::default(), super::entity::DEFAULT_DURATION_SECS)
    }
}
