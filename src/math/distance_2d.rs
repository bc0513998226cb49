use super::Point2;

/// Returns the minimum distance from `point` to the line segment `a`..`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((point.x - a.x).powi(2) + (point.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    ((point.x - closest_x).powi(2) + (point.y - closest_y).powi(2)).sqrt()
}

/// Projects `point` onto the segment `a`..`b`, clamped to the segment.
#[must_use]
pub fn project_point_on_segment(point: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return *a;
    }

    let t = ((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Angle of the segment `a`..`b` in degrees, measured from the positive
/// x axis. Used to orient openings placed along a wall.
#[must_use]
pub fn segment_angle_deg(a: &Point2, b: &Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}
