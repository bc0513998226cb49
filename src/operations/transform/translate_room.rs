use crate::error::Result;
use crate::math::{Point2, Vector2};
use crate::operations::query::{apply_snap, FindSnapPoint, VertexSnap};
use crate::plan::{PlanStore, RoomId};

/// Snapping strategy applied while translating a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnapMode {
    /// Raw translation, no correction.
    None,
    /// Vertex-pairwise correction (the simpler fallback resolver).
    Vertices,
    /// Bounding-box edge alignment with span-overlap filtering.
    #[default]
    Edges,
}

/// Translates a whole room by a drag delta, optionally snapping to
/// sibling rooms.
///
/// Each call is a full recomputation from the room's current vertices
/// plus the cumulative delta since drag start; callers must not feed
/// back incremental deltas, or floating-point drift compounds across
/// pointer moves.
pub struct TranslateRoom {
    room: RoomId,
    delta: Vector2,
    snap: SnapMode,
}

impl TranslateRoom {
    /// Creates a new `TranslateRoom` operation with edge snapping.
    #[must_use]
    pub fn new(room: RoomId, delta: Vector2) -> Self {
        Self {
            room,
            delta,
            snap: SnapMode::default(),
        }
    }

    /// Overrides the snapping strategy.
    #[must_use]
    pub fn with_snap(mut self, snap: SnapMode) -> Self {
        self.snap = snap;
        self
    }

    /// Executes the translation, modifying the room in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        let delta = match self.snap {
            SnapMode::None => self.delta,
            SnapMode::Vertices => {
                let correction = VertexSnap::new(self.room, self.delta).execute(store)?;
                self.delta + correction
            }
            SnapMode::Edges => {
                let resolution = FindSnapPoint::new(self.room, self.delta).execute(store)?;
                apply_snap(self.delta, &resolution)
            }
        };
        if delta != self.delta {
            tracing::debug!(
                dx = delta.x,
                dy = delta.y,
                "drag delta corrected by snapping"
            );
        }

        let room = store.room_mut(self.room)?;
        let moved: Vec<Point2> = room
            .vertices
            .iter()
            .map(|v| Point2::new(v.x + delta.x, v.y + delta.y))
            .collect();
        room.commit_vertices(moved);
        Ok(())
    }
}
