use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
/// Returns 0 for fewer than 3 vertices.
#[must_use]
pub fn signed_area_2d(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    sum * 0.5
}

/// Computes the absolute area enclosed by a polygon.
///
/// Correct for simple (non-self-intersecting) polygons regardless of
/// winding and convexity. Self-intersecting input produces an
/// unspecified value rather than an error.
#[must_use]
pub fn area_2d(vertices: &[Point2]) -> f64 {
    signed_area_2d(vertices).abs()
}

/// Returns the arithmetic mean of the vertices, or `None` for empty input.
///
/// This is the vertex centroid, not the area centroid. It is used for
/// label placement, where the distinction does not matter.
#[must_use]
pub fn centroid_2d(vertices: &[Point2]) -> Option<Point2> {
    if vertices.is_empty() {
        return None;
    }
    let mut x = 0.0;
    let mut y = 0.0;
    for v in vertices {
        x += v.x;
        y += v.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = vertices.len() as f64;
    Some(Point2::new(x / n, y / n))
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Bounds2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Bounds2 {
    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Computes the axis-aligned bounding box of a vertex sequence.
///
/// Returns `None` for empty input; "no bounds" is a valid query result,
/// not an error.
#[must_use]
pub fn bounds_2d(vertices: &[Point2]) -> Option<Bounds2> {
    let first = vertices.first()?;
    let mut min = *first;
    let mut max = *first;
    for v in &vertices[1..] {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Some(Bounds2 { min, max })
}
