//! Link segments and circular obstacles.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// A circular obstacle in the arm's workspace.
///
/// A radius of zero or below is valid and never collides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Circle center
    pub center: Point2D,
    /// Circle radius
    pub radius: f64,
}

impl Obstacle {
    /// Create an obstacle from center coordinates and radius
    #[inline]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2D::new(x, y),
            radius,
        }
    }

    /// Whether this obstacle can collide with anything (radius > 0)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.radius > 0.0
    }
}

impl From<(f64, f64, f64)> for Obstacle {
    fn from((x, y, radius): (f64, f64, f64)) -> Self {
        Self::new(x, y, radius)
    }
}

impl From<[f64; 3]> for Obstacle {
    fn from([x, y, radius]: [f64; 3]) -> Self {
        Self::new(x, y, radius)
    }
}

/// A straight line segment, one physical link of the arm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point (joint closer to the base)
    pub start: Point2D,
    /// End point
    pub end: Point2D,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }
}
