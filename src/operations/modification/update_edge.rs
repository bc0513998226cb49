use super::{collapses, rect_vertices};
use crate::error::Result;
use crate::math::rect_2d::{update_edge, Side};
use crate::math::Point2;
use crate::plan::{PlanStore, RoomId};

/// Drags one edge of a rectangular room to a new position.
///
/// Both vertices bounding the edge take the matching coordinate of
/// `new_pos`; the coordinate along the edge is ignored. Derived room
/// fields are recomputed on commit, and a drag that would collapse the
/// rectangle is rejected with the prior shape kept.
pub struct UpdateEdge {
    room: RoomId,
    side: Side,
    new_pos: Point2,
}

impl UpdateEdge {
    /// Creates a new `UpdateEdge` operation.
    #[must_use]
    pub fn new(room: RoomId, side: Side, new_pos: Point2) -> Self {
        Self {
            room,
            side,
            new_pos,
        }
    }

    /// Executes the edge drag, modifying the room in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist or is not a 4-vertex
    /// rectangle.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        let room = store.room_mut(self.room)?;
        let rect = rect_vertices(&room.vertices)?;

        let updated = update_edge(&rect, self.side, self.new_pos);
        if collapses(&updated) {
            tracing::debug!(
                side = ?self.side,
                "edge drag would collapse the rectangle, keeping prior shape"
            );
            return Ok(());
        }

        room.commit_vertices(updated.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::area_2d;
    use crate::math::rect_2d::rect_from_corners;
    use crate::math::TOLERANCE;
    use crate::plan::{RoomData, RoomKind};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn store_with_rect() -> (PlanStore, RoomId) {
        let mut store = PlanStore::new();
        let id = store.add_room(RoomData::new(
            "Room 1",
            RoomKind::Other,
            rect_from_corners(p(0.0, 0.0), p(100.0, 50.0)).to_vec(),
        ));
        (store, id)
    }

    #[test]
    fn top_drag_moves_only_the_top_pair() {
        let (mut store, id) = store_with_rect();
        // The x coordinate is deliberately nonsense; only y is read.
        UpdateEdge::new(id, Side::Top, p(9999.0, 20.0))
            .execute(&mut store)
            .unwrap();

        let room = store.room(id).unwrap();
        assert_eq!(room.vertices[0], p(0.0, 20.0));
        assert_eq!(room.vertices[1], p(100.0, 20.0));
        assert_eq!(room.vertices[2], p(100.0, 50.0));
        assert_eq!(room.vertices[3], p(0.0, 50.0));
    }

    #[test]
    fn derived_fields_stay_consistent() {
        let (mut store, id) = store_with_rect();
        UpdateEdge::new(id, Side::Right, p(80.0, 0.0))
            .execute(&mut store)
            .unwrap();

        let room = store.room(id).unwrap();
        assert!((room.area - area_2d(&room.vertices)).abs() < TOLERANCE);
        assert!((room.area - 80.0 * 50.0).abs() < TOLERANCE);
        assert!((room.dimensions.width - 80.0).abs() < TOLERANCE);
        assert!((room.dimensions.height - 50.0).abs() < TOLERANCE);
        assert_eq!(room.walls.len(), 4);
    }

    #[test]
    fn collapsing_drag_keeps_prior_shape() {
        let (mut store, id) = store_with_rect();
        let before = store.room(id).unwrap().vertices.clone();

        // Dragging the right edge past the left edge.
        UpdateEdge::new(id, Side::Right, p(-10.0, 0.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.room(id).unwrap().vertices, before);

        // Dragging the bottom edge onto the top edge.
        UpdateEdge::new(id, Side::Bottom, p(0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.room(id).unwrap().vertices, before);
    }

    #[test]
    fn non_rectangular_room_is_invalid_input() {
        let mut store = PlanStore::new();
        let id = store.add_room(RoomData::new(
            "Room 1",
            RoomKind::Other,
            vec![p(0.0, 0.0), p(40.0, 0.0), p(20.0, 30.0)],
        ));

        let result = UpdateEdge::new(id, Side::Top, p(0.0, 1.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
