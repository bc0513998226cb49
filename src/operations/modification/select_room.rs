use crate::error::Result;
use crate::plan::{PlanStore, RoomId, Selection};

/// Selects a room and brings it to the front of the stacking order.
///
/// The selected room takes the maximum z-index plus one while every
/// other room is pushed back by one, so exactly one room holds the
/// maximum at any time.
pub struct SelectRoom {
    room: RoomId,
}

impl SelectRoom {
    /// Creates a new `SelectRoom` operation.
    #[must_use]
    pub fn new(room: RoomId) -> Self {
        Self { room }
    }

    /// Executes the selection, reordering the stacking in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        store.room(self.room)?;

        let max_z = store.rooms().map(|(_, r)| r.z_index).fold(0, i64::max);
        for (id, room) in store.rooms_mut() {
            room.z_index = if id == self.room {
                max_z + 1
            } else {
                room.z_index - 1
            };
        }

        store.set_selected(Some(Selection::Room(self.room)));
        Ok(())
    }
}
