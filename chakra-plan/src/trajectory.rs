//! Conversions between grid paths and joint-angle trajectories.
//!
//! A found path is decoded into one joint-angle vector per cell. Downstream
//! consumers (smoothing, animation) work on that angle sequence; a modified
//! sequence can be re-validated here against limits and obstacles without
//! rebuilding the grid.

use crate::arm::{ArmGeometry, JointLimits};
use crate::collision::{Obstacle, segments_collide};
use crate::core::Point2D;
use crate::core::math::{angle_to_index, index_to_angle};
use crate::error::{Error, Result};
use crate::grid::GridCell;
use crate::search::SearchPath;

/// Joint angles (radians) of one cell.
pub fn cell_to_angles(cell: &[usize], resolution: usize) -> Vec<f64> {
    cell.iter()
        .map(|&index| index_to_angle(index, resolution))
        .collect()
}

/// Joint-angle sequence of a path, start first.
pub fn path_to_angles(path: &SearchPath, resolution: usize) -> Vec<Vec<f64>> {
    path.to_angles(resolution)
}

/// Nearest cell for a joint-angle vector. Angles outside `[-π, π)` wrap.
///
/// Fails with [`Error::NonFiniteAngle`] for a NaN or infinite angle.
pub fn angles_to_cell(angles: &[f64], resolution: usize) -> Result<GridCell> {
    angles
        .iter()
        .enumerate()
        .map(|(joint, &angle)| {
            if angle.is_finite() {
                Ok(angle_to_index(angle, resolution))
            } else {
                Err(Error::NonFiniteAngle { joint, angle })
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(GridCell::new)
}

fn check_waypoint(geometry: &ArmGeometry, angles: &[f64]) -> Result<()> {
    if angles.len() != geometry.n_links() {
        return Err(Error::LinkAngleMismatch {
            links: geometry.n_links(),
            angles: angles.len(),
        });
    }
    Ok(())
}

/// End-effector position for every waypoint of an angle sequence.
pub fn end_effector_trace(geometry: &ArmGeometry, waypoints: &[Vec<f64>]) -> Result<Vec<Point2D>> {
    waypoints
        .iter()
        .map(|angles| {
            check_waypoint(geometry, angles)?;
            Ok(geometry.end_effector(angles))
        })
        .collect()
}

/// Index of the first waypoint that violates the limits or hits an obstacle.
pub fn first_invalid_waypoint(
    geometry: &ArmGeometry,
    limits: Option<&JointLimits>,
    obstacles: &[Obstacle],
    waypoints: &[Vec<f64>],
) -> Result<Option<usize>> {
    let mut points = Vec::with_capacity(geometry.n_links() + 1);
    for (waypoint, angles) in waypoints.iter().enumerate() {
        check_waypoint(geometry, angles)?;
        if limits.is_some_and(|limits| !limits.is_within_limits(angles)) {
            return Ok(Some(waypoint));
        }
        geometry.forward_kinematics_into(angles, &mut points);
        if segments_collide(&points, obstacles) {
            return Ok(Some(waypoint));
        }
    }
    Ok(None)
}

/// Whether every waypoint respects the limits and clears every obstacle.
pub fn is_collision_free(
    geometry: &ArmGeometry,
    limits: Option<&JointLimits>,
    obstacles: &[Obstacle],
    waypoints: &[Vec<f64>],
) -> Result<bool> {
    first_invalid_waypoint(geometry, limits, obstacles, waypoints).map(|found| found.is_none())
}
