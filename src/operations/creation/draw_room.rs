use crate::error::Result;
use crate::math::rect_2d::rect_from_corners;
use crate::math::Point2;
use crate::plan::{PlanStore, RoomData, RoomId, RoomKind};

/// Minimum width and height for a drawn room to be committed.
pub const MIN_ROOM_SIZE: f64 = 20.0;

/// Completes a drag-to-draw room gesture spanning two opposite corners.
///
/// The corners may be given in any order; the committed rectangle is
/// always in the fixed vertex ordering. A gesture below [`MIN_ROOM_SIZE`]
/// in either extent is discarded wholesale, with no partial commit.
pub struct DrawRoom {
    start: Point2,
    end: Point2,
    kind: RoomKind,
}

impl DrawRoom {
    /// Creates a new `DrawRoom` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            kind: RoomKind::Other,
        }
    }

    /// Sets the room kind (defaults to [`RoomKind::Other`]).
    #[must_use]
    pub fn with_kind(mut self, kind: RoomKind) -> Self {
        self.kind = kind;
        self
    }

    /// Executes the gesture, committing the room to the store.
    ///
    /// Returns `Ok(None)` when the gesture is below the minimum size;
    /// that is the silent-discard path, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self, store: &mut PlanStore) -> Result<Option<RoomId>> {
        let width = (self.end.x - self.start.x).abs();
        let height = (self.end.y - self.start.y).abs();
        if width < MIN_ROOM_SIZE || height < MIN_ROOM_SIZE {
            tracing::debug!(width, height, "room draw below minimum size, discarded");
            return Ok(None);
        }

        let vertices = rect_from_corners(self.start, self.end).to_vec();
        let mut room = RoomData::new(
            format!("Room {}", store.room_count() + 1),
            self.kind,
            vertices,
        );
        // New rooms stack on top of everything already in the plan;
        // sequential creation yields the dense order 0, 1, 2, ...
        room.z_index = store
            .rooms()
            .map(|(_, r)| r.z_index + 1)
            .max()
            .unwrap_or(0);

        let id = store.add_room(room);
        tracing::debug!(?id, width, height, "room created");
        Ok(Some(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn commits_a_room_with_derived_fields() {
        let mut store = PlanStore::new();
        let id = DrawRoom::new(p(0.0, 0.0), p(100.0, 100.0))
            .execute(&mut store)
            .unwrap()
            .unwrap();

        let room = store.room(id).unwrap();
        assert_eq!(room.name, "Room 1");
        assert_eq!(room.z_index, 0);
        assert!((room.area - 10000.0).abs() < TOLERANCE);
        assert!((room.dimensions.width - 100.0).abs() < TOLERANCE);
        assert!((room.dimensions.height - 100.0).abs() < TOLERANCE);
        assert_eq!(room.walls.len(), 4);
    }

    #[test]
    fn corners_are_normalized_regardless_of_drag_direction() {
        let mut store = PlanStore::new();
        // Drag from bottom-right up to top-left.
        let id = DrawRoom::new(p(100.0, 100.0), p(0.0, 0.0))
            .execute(&mut store)
            .unwrap()
            .unwrap();

        let room = store.room(id).unwrap();
        assert_eq!(room.vertices[0], p(0.0, 0.0));
        assert_eq!(room.vertices[2], p(100.0, 100.0));
    }

    #[test]
    fn below_minimum_size_is_discarded() {
        let mut store = PlanStore::new();
        let result = DrawRoom::new(p(0.0, 0.0), p(15.0, 15.0))
            .execute(&mut store)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.room_count(), 0);
    }

    #[test]
    fn one_small_extent_is_enough_to_discard() {
        let mut store = PlanStore::new();
        let result = DrawRoom::new(p(0.0, 0.0), p(100.0, 15.0))
            .execute(&mut store)
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.room_count(), 0);
    }

    #[test]
    fn names_and_stacking_follow_creation_order() {
        let mut store = PlanStore::new();
        DrawRoom::new(p(0.0, 0.0), p(50.0, 50.0))
            .execute(&mut store)
            .unwrap();
        let second = DrawRoom::new(p(100.0, 0.0), p(150.0, 50.0))
            .with_kind(RoomKind::Bedroom)
            .execute(&mut store)
            .unwrap()
            .unwrap();

        let room = store.room(second).unwrap();
        assert_eq!(room.name, "Room 2");
        assert_eq!(room.z_index, 1);
        assert_eq!(room.kind, RoomKind::Bedroom);
    }
}
