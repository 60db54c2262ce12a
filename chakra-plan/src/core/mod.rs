//! Core types for the Chakra-Plan library.
//!
//! ## Coordinates
//! - [`Point2D`]: Workspace coordinates of arm joints and obstacle centers
//!
//! ## Angles
//! - [`math`]: Degree conversion and the index ↔ angle discretization
//!   shared by the grid builder, the search and trajectory decoding
//!
//! All angles are radians, counter-clockwise positive from +X. The arm base
//! sits at the origin.

pub mod math;
mod point;

pub use math::{angle_to_index, deg_to_rad, index_to_angle};
pub use point::Point2D;
