mod select_room;
mod update_corner;
mod update_edge;

pub use select_room::SelectRoom;
pub use update_corner::UpdateCorner;
pub use update_edge::UpdateEdge;

use crate::error::OperationError;
use crate::math::{Point2, TOLERANCE};

/// Validates that a room polygon is a 4-vertex rectangle and returns it
/// as a fixed-size array for the edit kernel.
fn rect_vertices(vertices: &[Point2]) -> Result<[Point2; 4], OperationError> {
    vertices.try_into().map_err(|_| {
        OperationError::InvalidInput(format!(
            "rectangle edits require exactly 4 vertices, got {}",
            vertices.len()
        ))
    })
}

/// True when an edited rectangle has lost its positive width or height.
///
/// Spans are signed in the fixed vertex ordering, so a corner dragged
/// past its opposite shows up as a non-positive span here.
fn collapses(vertices: &[Point2; 4]) -> bool {
    vertices[1].x - vertices[0].x < TOLERANCE || vertices[2].y - vertices[1].y < TOLERANCE
}
