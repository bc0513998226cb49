use crate::error::Result;
use crate::math::{Point2, Vector2};
use crate::plan::{PlanStore, WallId};

/// Translates a standalone wall by a drag delta.
///
/// Walls do not snap to other shapes; the delta is applied as-is.
pub struct TranslateWall {
    wall: WallId,
    delta: Vector2,
}

impl TranslateWall {
    /// Creates a new `TranslateWall` operation.
    #[must_use]
    pub fn new(wall: WallId, delta: Vector2) -> Self {
        Self { wall, delta }
    }

    /// Executes the translation, modifying the wall in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall does not exist.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        let wall = store.wall_mut(self.wall)?;
        wall.start = Point2::new(wall.start.x + self.delta.x, wall.start.y + self.delta.y);
        wall.end = Point2::new(wall.end.x + self.delta.x, wall.end.y + self.delta.y);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::plan::WallData;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn moves_both_endpoints() {
        let mut store = PlanStore::new();
        let id = store.add_wall(WallData::new(p(0.0, 0.0), p(100.0, 0.0), 20.0));

        TranslateWall::new(id, Vector2::new(5.0, -3.0))
            .execute(&mut store)
            .unwrap();

        let wall = store.wall(id).unwrap();
        assert_relative_eq!(wall.start.x, 5.0);
        assert_relative_eq!(wall.start.y, -3.0);
        assert_relative_eq!(wall.end.x, 105.0);
        assert_relative_eq!(wall.end.y, -3.0);
        assert!((wall.length() - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn missing_wall_is_an_error() {
        let mut store = PlanStore::new();
        let id = store.add_wall(WallData::new(p(0.0, 0.0), p(100.0, 0.0), 20.0));
        store.remove_wall(id);

        let result = TranslateWall::new(id, Vector2::new(1.0, 1.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
