use crate::error::Result;
use crate::math::Point2;
use crate::plan::{PlanStore, WallData, WallId, WallSettings};

/// Minimum length for a drawn standalone wall to be committed.
pub const MIN_WALL_LENGTH: f64 = 10.0;

/// Completes a drag-to-draw gesture for a standalone wall segment.
pub struct DrawWall {
    start: Point2,
    end: Point2,
    settings: WallSettings,
}

impl DrawWall {
    /// Creates a new `DrawWall` operation with default wall settings.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            settings: WallSettings::default(),
        }
    }

    /// Uses the given thickness and layer stack instead of the defaults.
    #[must_use]
    pub fn with_settings(mut self, settings: WallSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Executes the gesture, committing the wall to the store.
    ///
    /// Returns `Ok(None)` when the segment is shorter than
    /// [`MIN_WALL_LENGTH`]; nothing is committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self, store: &mut PlanStore) -> Result<Option<WallId>> {
        let wall = WallData::with_settings(self.start, self.end, &self.settings);
        let length = wall.length();
        if length < MIN_WALL_LENGTH {
            tracing::debug!(length, "wall draw below minimum length, discarded");
            return Ok(None);
        }

        let id = store.add_wall(wall);
        tracing::debug!(?id, length, "wall created");
        Ok(Some(id))
    }
}
