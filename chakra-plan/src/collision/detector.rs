//! Segment-circle intersection test.
//!
//! The closest point of the segment to the circle center is found by
//! projecting the center onto the segment's line and clamping the
//! projection parameter to the segment:
//!
//! ```text
//! t = clamp(dot(C - A, B - A) / |B - A|², 0, 1)
//! closest = A + t·(B - A)
//! collide  ⇔ |closest - C| < r
//! ```
//!
//! Tangency (`|closest - C| == r`) is free space.

use super::shapes::{Obstacle, Segment};
use crate::core::Point2D;

/// Check whether a segment intersects a circular obstacle.
///
/// - `radius <= 0` never collides.
/// - A degenerate segment collides iff the point is strictly inside.
/// - Contact on the circle boundary is not a collision.
///
/// The result does not depend on endpoint order.
pub fn intersects(segment: &Segment, obstacle: &Obstacle) -> bool {
    if !obstacle.is_active() {
        return false;
    }
    let radius = obstacle.radius;

    // Canonical endpoint order keeps the result exactly symmetric.
    let (a, b) = if (segment.start.x, segment.start.y) <= (segment.end.x, segment.end.y) {
        (segment.start, segment.end)
    } else {
        (segment.end, segment.start)
    };

    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a.distance(obstacle.center) < radius;
    }

    let t = ((obstacle.center - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    closest.distance(obstacle.center) < radius
}

/// Check whether any link of a pose collides with any obstacle.
///
/// `points` is the joint chain (base first); every consecutive pair is one
/// link segment.
pub fn segments_collide(points: &[Point2D], obstacles: &[Obstacle]) -> bool {
    points.windows(2).any(|pair| {
        let segment = Segment::new(pair[0], pair[1]);
        obstacles
            .iter()
            .any(|obstacle| intersects(&segment, obstacle))
    })
}
