pub mod opening;
pub mod room;
pub mod snapshot;
pub mod wall;

pub use opening::{Door, DoorKind, DoorSwing, Window, WindowKind};
pub use room::{Dimensions, RoomData, RoomId, RoomKind, RoomStyle};
pub use snapshot::PlanSnapshot;
pub use wall::{wall_ring, WallData, WallId, WallLayer, WallSettings, ROOM_WALL_THICKNESS};

use crate::error::PlanError;
use slotmap::SlotMap;

/// The currently selected entity, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Room(RoomId),
    Wall(WallId),
}

/// Central arena that owns every room and standalone wall of a floor
/// plan, plus the current selection.
///
/// Entities are addressed via typed IDs (generational indices). The
/// store itself only does bookkeeping; all editing behavior lives in
/// the operation types, which take the store explicitly on every call.
#[derive(Debug, Default)]
pub struct PlanStore {
    rooms: SlotMap<RoomId, RoomData>,
    walls: SlotMap<WallId, WallData>,
    selected: Option<Selection>,
}

impl PlanStore {
    /// Creates a new, empty plan store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Room operations ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, data: RoomData) -> RoomId {
        self.rooms.insert(data)
    }

    /// Returns a reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room(&self, id: RoomId) -> Result<&RoomData, PlanError> {
        self.rooms
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("room".into()))
    }

    /// Returns a mutable reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut RoomData, PlanError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("room".into()))
    }

    /// Removes a room, returning its data if it existed. Clears the
    /// selection when it pointed at the removed room.
    pub fn remove_room(&mut self, id: RoomId) -> Option<RoomData> {
        if self.selected == Some(Selection::Room(id)) {
            self.selected = None;
        }
        self.rooms.remove(id)
    }

    /// Iterates over all rooms.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &RoomData)> {
        self.rooms.iter()
    }

    /// Iterates mutably over all rooms.
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = (RoomId, &mut RoomData)> {
        self.rooms.iter_mut()
    }

    /// Number of rooms in the plan.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // --- Wall operations ---

    /// Inserts a standalone wall and returns its ID.
    pub fn add_wall(&mut self, data: WallData) -> WallId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData, PlanError> {
        self.walls
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall".into()))
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData, PlanError> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall".into()))
    }

    /// Removes a standalone wall, returning its data if it existed.
    /// Clears the selection when it pointed at the removed wall.
    pub fn remove_wall(&mut self, id: WallId) -> Option<WallData> {
        if self.selected == Some(Selection::Wall(id)) {
            self.selected = None;
        }
        self.walls.remove(id)
    }

    /// Iterates over all standalone walls.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallData)> {
        self.walls.iter()
    }

    /// Number of standalone walls in the plan.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    // --- Selection ---

    /// The current selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Selection> {
        self.selected
    }

    /// Replaces the current selection.
    pub fn set_selected(&mut self, selection: Option<Selection>) {
        self.selected = selection;
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Deletes whatever entity is currently selected. Returns `true`
    /// if something was removed.
    pub fn remove_selected(&mut self) -> bool {
        match self.selected.take() {
            Some(Selection::Room(id)) => self.rooms.remove(id).is_some(),
            Some(Selection::Wall(id)) => self.walls.remove(id).is_some(),
            None => false,
        }
    }

    /// Removes every entity and clears the selection.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.walls.clear();
        self.selected = None;
    }
}
