//! Proximity snapping between a dragged room and its siblings.
//!
//! Two resolvers are provided. [`FindSnapPoint`] aligns bounding-box
//! edges and only considers edge pairs whose spans overlap on the
//! perpendicular axis, so a dragged wall never snaps to a distant,
//! unrelated parallel wall. [`VertexSnap`] is the simpler fallback that
//! pairs raw vertices with no overlap precondition. Both treat the x
//! and y axes independently: a single drag may pick up an x correction
//! from one sibling and a y correction from another.

use crate::error::Result;
use crate::math::polygon_2d::bounds_2d;
use crate::math::rect_2d::Side;
use crate::math::{Point2, Vector2};
use crate::plan::{PlanStore, RoomId};

/// Distance within which a dragged edge or vertex is pulled into exact
/// alignment. The comparison is strict.
pub const SNAP_DISTANCE: f64 = 15.0;

/// Snapping axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One of the four bounding-box edges of a room.
///
/// `position` is the edge's fixed coordinate on `axis`; `start`/`end`
/// carry the edge's span on the perpendicular axis.
#[derive(Debug, Clone, Copy)]
pub struct RoomEdge {
    pub axis: Axis,
    pub position: f64,
    pub side: Side,
    pub start: Point2,
    pub end: Point2,
}

/// Derives the four bounding-box edges of a vertex polygon. Empty input
/// has no edges.
#[must_use]
pub fn room_edges(vertices: &[Point2]) -> Vec<RoomEdge> {
    let Some(b) = bounds_2d(vertices) else {
        return Vec::new();
    };
    vec![
        RoomEdge {
            axis: Axis::X,
            position: b.min.x,
            side: Side::Left,
            start: Point2::new(b.min.x, b.min.y),
            end: Point2::new(b.min.x, b.max.y),
        },
        RoomEdge {
            axis: Axis::X,
            position: b.max.x,
            side: Side::Right,
            start: Point2::new(b.max.x, b.min.y),
            end: Point2::new(b.max.x, b.max.y),
        },
        RoomEdge {
            axis: Axis::Y,
            position: b.min.y,
            side: Side::Top,
            start: Point2::new(b.min.x, b.min.y),
            end: Point2::new(b.max.x, b.min.y),
        },
        RoomEdge {
            axis: Axis::Y,
            position: b.max.y,
            side: Side::Bottom,
            start: Point2::new(b.min.x, b.max.y),
            end: Point2::new(b.max.x, b.max.y),
        },
    ]
}

/// True when two same-axis edges overlap on the perpendicular axis.
///
/// Intervals are closed, so edges that merely touch still count.
#[must_use]
pub fn edges_overlap(a: &RoomEdge, b: &RoomEdge) -> bool {
    if a.axis != b.axis {
        return false;
    }
    let span = |e: &RoomEdge| match e.axis {
        Axis::X => (e.start.y.min(e.end.y), e.start.y.max(e.end.y)),
        Axis::Y => (e.start.x.min(e.end.x), e.start.x.max(e.end.x)),
    };
    let (a_min, a_max) = span(a);
    let (b_min, b_max) = span(b);
    !(a_max < b_min || b_max < a_min)
}

/// A single-axis snap candidate.
#[derive(Debug, Clone, Copy)]
pub struct SnapHit {
    /// Replacement for the drag delta's component on the snapped axis;
    /// applying it lands the two edges exactly aligned.
    pub snap_delta: f64,
    /// Edge-to-edge distance at the uncorrected drag position.
    pub distance: f64,
    /// Which edge of the moving room matched.
    pub moving_side: Side,
    /// Which edge of the target room matched.
    pub target_side: Side,
    /// The room snapped against.
    pub target: RoomId,
}

/// Best snap candidate per axis; either or both may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapResolution {
    pub x: Option<SnapHit>,
    pub y: Option<SnapHit>,
}

/// Overwrites the matched components of a drag delta with their snap
/// values, leaving unmatched components untouched.
#[must_use]
pub fn apply_snap(delta: Vector2, snap: &SnapResolution) -> Vector2 {
    let mut out = delta;
    if let Some(hit) = &snap.x {
        out.x = hit.snap_delta;
    }
    if let Some(hit) = &snap.y {
        out.y = hit.snap_delta;
    }
    out
}

/// Finds the nearest aligned sibling edges for a room drag.
///
/// The moving room is evaluated at its dragged position (vertices plus
/// `delta`). Per axis, over every pair of same-axis edges whose spans
/// overlap on the perpendicular axis, the pair with the smallest gap
/// wins, subject to the strict [`SNAP_DISTANCE`] threshold. Finding no
/// qualifying pair is reported as an absent hit, never as a zero
/// correction.
pub struct FindSnapPoint {
    room: RoomId,
    delta: Vector2,
}

impl FindSnapPoint {
    /// Creates a new `FindSnapPoint` query.
    #[must_use]
    pub fn new(room: RoomId, delta: Vector2) -> Self {
        Self { room, delta }
    }

    /// Executes the query against every other room in the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the moving room does not exist.
    pub fn execute(&self, store: &PlanStore) -> Result<SnapResolution> {
        let moving = store.room(self.room)?;
        let moved: Vec<Point2> = moving
            .vertices
            .iter()
            .map(|v| Point2::new(v.x + self.delta.x, v.y + self.delta.y))
            .collect();
        let moving_edges = room_edges(&moved);

        let mut resolution = SnapResolution::default();
        for (id, other) in store.rooms() {
            if id == self.room {
                continue;
            }
            for other_edge in room_edges(&other.vertices) {
                for moving_edge in &moving_edges {
                    if !edges_overlap(moving_edge, &other_edge) {
                        continue;
                    }
                    let distance = (moving_edge.position - other_edge.position).abs();
                    if distance >= SNAP_DISTANCE {
                        continue;
                    }
                    let (slot, delta_component) = match moving_edge.axis {
                        Axis::X => (&mut resolution.x, self.delta.x),
                        Axis::Y => (&mut resolution.y, self.delta.y),
                    };
                    if slot.as_ref().map_or(true, |best| distance < best.distance) {
                        *slot = Some(SnapHit {
                            snap_delta: delta_component
                                + (other_edge.position - moving_edge.position),
                            distance,
                            moving_side: moving_edge.side,
                            target_side: other_edge.side,
                            target: id,
                        });
                    }
                }
            }
        }
        Ok(resolution)
    }
}

/// Vertex-pairwise snap: the fallback resolver.
///
/// Pairs every vertex of the moving room (at its dragged position) with
/// every vertex of every other room and tracks the smallest gap per
/// axis, subject to the strict [`SNAP_DISTANCE`] threshold. Returns the
/// per-axis corrective offset to ADD to the drag delta; axes with no
/// qualifying pair contribute zero.
pub struct VertexSnap {
    room: RoomId,
    delta: Vector2,
}

impl VertexSnap {
    /// Creates a new `VertexSnap` query.
    #[must_use]
    pub fn new(room: RoomId, delta: Vector2) -> Self {
        Self { room, delta }
    }

    /// Executes the query against every other room in the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the moving room does not exist.
    pub fn execute(&self, store: &PlanStore) -> Result<Vector2> {
        let moving = store.room(self.room)?;

        let mut best_x: Option<f64> = None;
        let mut best_y: Option<f64> = None;
        for (id, other) in store.rooms() {
            if id == self.room {
                continue;
            }
            for other_vertex in &other.vertices {
                for vertex in &moving.vertices {
                    let dist_x = (vertex.x + self.delta.x - other_vertex.x).abs();
                    if dist_x < SNAP_DISTANCE && best_x.map_or(true, |c: f64| dist_x < c.abs()) {
                        best_x = Some(other_vertex.x - (vertex.x + self.delta.x));
                    }

                    let dist_y = (vertex.y + self.delta.y - other_vertex.y).abs();
                    if dist_y < SNAP_DISTANCE && best_y.map_or(true, |c: f64| dist_y < c.abs()) {
                        best_y = Some(other_vertex.y - (vertex.y + self.delta.y));
                    }
                }
            }
        }

        Ok(Vector2::new(
            best_x.unwrap_or(0.0),
            best_y.unwrap_or(0.0),
        ))
    }
}
