use serde::{Deserialize, Serialize};

use super::opening::{Door, Window};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a standalone wall in the plan store.
    pub struct WallId;
}

/// Thickness of the walls derived from a room outline.
pub const ROOM_WALL_THICKNESS: f64 = 10.0;

/// One material layer of a wall cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallLayer {
    pub name: String,
    /// Share of the wall thickness taken by this layer, in `0.0..=1.0`.
    pub thickness_ratio: f64,
    pub color: String,
}

/// Drawing defaults applied to newly created standalone walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSettings {
    pub thickness: f64,
    pub layers: Vec<WallLayer>,
}

impl Default for WallSettings {
    fn default() -> Self {
        Self {
            thickness: 20.0,
            layers: vec![WallLayer {
                name: "interior".to_owned(),
                thickness_ratio: 0.5,
                color: "#000000ff".to_owned(),
            }],
        }
    }
}

/// A straight wall segment.
///
/// Standalone walls live in the plan store under a [`WallId`]; the wall
/// ring of a room is stored inline on the room and identified by edge
/// position instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallData {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub layers: Vec<WallLayer>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
}

impl WallData {
    /// Creates a bare wall segment with the given thickness and no
    /// layers or openings.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            layers: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Creates a wall segment carrying the thickness and layer stack of
    /// the given drawing settings.
    #[must_use]
    pub fn with_settings(start: Point2, end: Point2, settings: &WallSettings) -> Self {
        Self {
            start,
            end,
            thickness: settings.thickness,
            layers: settings.layers.clone(),
            doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        ((self.end.x - self.start.x).powi(2) + (self.end.y - self.start.y).powi(2)).sqrt()
    }
}

/// Derives the closed wall ring of a polygon: wall `i` spans vertex `i`
/// to vertex `i+1` (mod n). Returns an empty ring for fewer than 2
/// vertices.
#[must_use]
pub fn wall_ring(vertices: &[Point2], thickness: f64) -> Vec<WallData> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| WallData::new(vertices[i], vertices[(i + 1) % n], thickness))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ring_closes_back_to_first_vertex() {
        let vertices = vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let ring = wall_ring(&vertices, ROOM_WALL_THICKNESS);

        assert_eq!(ring.len(), 4);
        assert_eq!(ring[3].start, p(0.0, 10.0));
        assert_eq!(ring[3].end, p(0.0, 0.0));
        for wall in &ring {
            assert!((wall.thickness - ROOM_WALL_THICKNESS).abs() < TOLERANCE);
            assert!(wall.layers.is_empty());
            assert!(wall.doors.is_empty());
            assert!(wall.windows.is_empty());
        }
    }

    #[test]
    fn ring_of_degenerate_input_is_empty() {
        assert!(wall_ring(&[], 10.0).is_empty());
        assert!(wall_ring(&[p(1.0, 1.0)], 10.0).is_empty());
    }

    #[test]
    fn settings_carry_thickness_and_layers() {
        let settings = WallSettings::default();
        let wall = WallData::with_settings(p(0.0, 0.0), p(30.0, 40.0), &settings);

        assert!((wall.thickness - 20.0).abs() < TOLERANCE);
        assert_eq!(wall.layers.len(), 1);
        assert_eq!(wall.layers[0].name, "interior");
        assert!((wall.length() - 50.0).abs() < TOLERANCE);
    }
}
