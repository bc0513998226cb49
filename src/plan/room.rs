use serde::{Deserialize, Serialize};

use super::wall::{wall_ring, WallData, ROOM_WALL_THICKNESS};
use crate::math::polygon_2d::{area_2d, bounds_2d, centroid_2d};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a room in the plan store.
    pub struct RoomId;
}

/// Functional category of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Kitchen,
    Living,
    Dining,
    Hallway,
    #[default]
    Other,
}

/// Fill and stroke used when rendering a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub opacity: f64,
}

impl Default for RoomStyle {
    fn default() -> Self {
        Self {
            fill_color: "#ffffff".to_owned(),
            stroke_color: "#6374cd".to_owned(),
            opacity: 1.0,
        }
    }
}

/// Axis-aligned extents of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Data associated with a room.
///
/// `vertices` is the single source of truth for the shape: a closed
/// polygon of at least 3 points, exactly 4 in the fixed
/// top-left/top-right/bottom-right/bottom-left order for rectangular
/// rooms. `walls`, `area`, `dimensions` and `label_position` are
/// derived caches for the rendering layer and are recomputed together
/// by [`RoomData::commit_vertices`] on every shape change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomData {
    pub name: String,
    pub kind: RoomKind,
    pub vertices: Vec<Point2>,
    pub walls: Vec<WallData>,
    pub area: f64,
    pub dimensions: Dimensions,
    pub style: RoomStyle,
    pub label_position: Option<Point2>,
    /// Draw/interaction order. The most recently selected room holds
    /// the maximum value.
    pub z_index: i64,
}

impl RoomData {
    /// Creates a room from a vertex polygon, computing all derived
    /// fields. The z-index is assigned by the store on insertion.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RoomKind, vertices: Vec<Point2>) -> Self {
        let mut room = Self {
            name: name.into(),
            kind,
            vertices: Vec::new(),
            walls: Vec::new(),
            area: 0.0,
            dimensions: Dimensions::default(),
            style: RoomStyle::default(),
            label_position: None,
            z_index: 0,
        };
        room.commit_vertices(vertices);
        room
    }

    /// Replaces the vertex polygon and recomputes every derived field.
    ///
    /// This is the only path that may write `vertices`; it keeps
    /// `walls`, `area`, `dimensions` and `label_position` consistent
    /// with the shape. Walls are regenerated wholesale, never patched,
    /// so wall identity is positional and not stable across edits.
    pub fn commit_vertices(&mut self, vertices: Vec<Point2>) {
        self.area = area_2d(&vertices);
        self.dimensions = dimensions_of(&vertices);
        self.walls = wall_ring(&vertices, ROOM_WALL_THICKNESS);
        self.label_position = centroid_2d(&vertices);
        self.vertices = vertices;
    }
}

/// Extents of a vertex polygon: the axis-aligned edge spans for a
/// 4-vertex rectangle, the bounding-box spans otherwise.
fn dimensions_of(vertices: &[Point2]) -> Dimensions {
    if vertices.len() == 4 {
        return Dimensions {
            width: (vertices[1].x - vertices[0].x).abs(),
            height: (vertices[2].y - vertices[1].y).abs(),
        };
    }
    bounds_2d(vertices).map_or_else(Dimensions::default, |b| Dimensions {
        width: b.width(),
        height: b.height(),
    })
}
