use super::{collapses, rect_vertices};
use crate::error::Result;
use crate::math::rect_2d::{update_corner, Corner};
use crate::math::Point2;
use crate::plan::{PlanStore, RoomId};

/// Drags one corner of a rectangular room to a new position.
///
/// The two adjacent corners follow to keep the shape an axis-aligned
/// rectangle; the opposite corner stays put. Every derived room field
/// is recomputed on commit. A drag that would collapse or invert the
/// rectangle is rejected and the prior shape kept.
pub struct UpdateCorner {
    room: RoomId,
    corner: Corner,
    new_pos: Point2,
}

impl UpdateCorner {
    /// Creates a new `UpdateCorner` operation.
    #[must_use]
    pub fn new(room: RoomId, corner: Corner, new_pos: Point2) -> Self {
        Self {
            room,
            corner,
            new_pos,
        }
    }

    /// Executes the corner drag, modifying the room in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist or is not a 4-vertex
    /// rectangle.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        let room = store.room_mut(self.room)?;
        let rect = rect_vertices(&room.vertices)?;

        let updated = update_corner(&rect, self.corner, self.new_pos);
        if collapses(&updated) {
            tracing::debug!(
                corner = ?self.corner,
                "corner drag would collapse the rectangle, keeping prior shape"
            );
            return Ok(());
        }

        room.commit_vertices(updated.to_vec());
        Ok(())
    }
}
