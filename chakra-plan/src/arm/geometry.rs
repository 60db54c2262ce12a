//! Link lengths and forward kinematics.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{Error, Result};

/// Immutable link set of a planar serial arm.
///
/// Joint angles are cumulative: link `i` points along the sum of the first
/// `i + 1` joint angles.
///
/// ```text
/// point[0] = (0, 0)
/// point[i] = point[i-1] + L[i-1] · (cos Σθ[..i], sin Σθ[..i])
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmGeometry {
    link_lengths: Vec<f64>,
}

impl ArmGeometry {
    /// Create a link set. Every length must be finite and positive.
    pub fn new(link_lengths: Vec<f64>) -> Result<Self> {
        if link_lengths.is_empty() {
            return Err(Error::EmptyArm);
        }
        for (link, &length) in link_lengths.iter().enumerate() {
            if !length.is_finite() || length <= 0.0 {
                return Err(Error::InvalidLinkLength { link, length });
            }
        }
        Ok(Self { link_lengths })
    }

    /// Number of links (and joints)
    #[inline]
    pub fn n_links(&self) -> usize {
        self.link_lengths.len()
    }

    /// Link lengths, base first
    #[inline]
    pub fn link_lengths(&self) -> &[f64] {
        &self.link_lengths
    }

    /// Maximum reach from the base (sum of link lengths)
    pub fn reach(&self) -> f64 {
        self.link_lengths.iter().sum()
    }

    /// Compute the joint chain for `angles` into a reusable buffer.
    ///
    /// `points` is cleared and receives `n_links + 1` points, base first.
    /// `angles` must hold one angle per link.
    pub fn forward_kinematics_into(&self, angles: &[f64], points: &mut Vec<Point2D>) {
        debug_assert_eq!(angles.len(), self.link_lengths.len());

        points.clear();
        points.push(Point2D::ZERO);

        let mut heading = 0.0;
        let mut current = Point2D::ZERO;
        for (&length, &angle) in self.link_lengths.iter().zip(angles) {
            heading += angle;
            current = current.point_at(heading, length);
            points.push(current);
        }
    }

    /// Compute the joint chain for `angles`.
    pub fn forward_kinematics(&self, angles: &[f64]) -> Vec<Point2D> {
        let mut points = Vec::with_capacity(self.link_lengths.len() + 1);
        self.forward_kinematics_into(angles, &mut points);
        points
    }

    /// End-effector position for `angles`.
    pub fn end_effector(&self, angles: &[f64]) -> Point2D {
        let mut heading = 0.0;
        let mut current = Point2D::ZERO;
        for (&length, &angle) in self.link_lengths.iter().zip(angles) {
            heading += angle;
            current = current.point_at(heading, length);
        }
        current
    }
}
