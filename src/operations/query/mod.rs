mod closest_wall;
mod snap;

pub use closest_wall::{FindClosestWall, WALL_PROXIMITY};
pub use snap::{
    apply_snap, edges_overlap, room_edges, Axis, FindSnapPoint, RoomEdge, SnapHit, SnapResolution,
    VertexSnap, SNAP_DISTANCE,
};
