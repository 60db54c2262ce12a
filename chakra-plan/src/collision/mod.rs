//! Collision checking between arm links and circular obstacles.
//!
//! Every link is a straight [`Segment`] between two consecutive joint
//! points; every obstacle is a circle. The test is pure and stateless so
//! the grid builder can call it from any worker thread.
//!
//! ```rust
//! use chakra_plan::collision::{Obstacle, Segment, intersects};
//! use chakra_plan::core::Point2D;
//!
//! let link = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0));
//! assert!(intersects(&link, &Obstacle::new(1.0, 0.2, 0.5)));
//! // Tangent contact is free space
//! assert!(!intersects(&link, &Obstacle::new(1.0, 0.5, 0.5)));
//! ```

mod detector;
mod shapes;

pub use detector::{intersects, segments_collide};
pub use shapes::{Obstacle, Segment};
