use crate::error::Result;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::plan::{PlanStore, WallId};

/// Hit radius for picking a wall near the pointer.
pub const WALL_PROXIMITY: f64 = 30.0;

/// Finds the standalone wall closest to a point, within the strict
/// [`WALL_PROXIMITY`] radius.
pub struct FindClosestWall {
    point: Point2,
}

impl FindClosestWall {
    /// Creates a new `FindClosestWall` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query. Returns `Ok(None)` when no wall is within
    /// range.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self, store: &PlanStore) -> Result<Option<WallId>> {
        let mut closest: Option<(WallId, f64)> = None;
        for (id, wall) in store.walls() {
            let distance = point_to_segment_dist(&self.point, &wall.start, &wall.end);
            if distance < WALL_PROXIMITY && closest.map_or(true, |(_, d)| distance < d) {
                closest = Some((id, distance));
            }
        }
        Ok(closest.map(|(id, _)| id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::plan::WallData;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn picks_the_nearest_wall_in_range() {
        let mut store = PlanStore::new();
        let near = store.add_wall(WallData::new(p(0.0, 0.0), p(100.0, 0.0), 20.0));
        store.add_wall(WallData::new(p(0.0, 50.0), p(100.0, 50.0), 20.0));

        let hit = FindClosestWall::new(p(50.0, 10.0))
            .execute(&store)
            .unwrap();
        assert_eq!(hit, Some(near));
    }

    #[test]
    fn out_of_range_point_finds_nothing() {
        let mut store = PlanStore::new();
        store.add_wall(WallData::new(p(0.0, 0.0), p(100.0, 0.0), 20.0));

        let hit = FindClosestWall::new(p(50.0, 200.0))
            .execute(&store)
            .unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn proximity_radius_is_strict() {
        let mut store = PlanStore::new();
        store.add_wall(WallData::new(p(0.0, 0.0), p(100.0, 0.0), 20.0));

        let at_radius = FindClosestWall::new(p(50.0, 30.0))
            .execute(&store)
            .unwrap();
        assert_eq!(at_radius, None);

        let inside = FindClosestWall::new(p(50.0, 29.9))
            .execute(&store)
            .unwrap();
        assert!(inside.is_some());
    }
}
