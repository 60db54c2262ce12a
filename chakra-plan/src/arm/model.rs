//! Stateful arm: geometry, current joint angles, optional limits and pose.

use log::{debug, trace};

use super::geometry::ArmGeometry;
use super::limits::JointLimits;
use crate::collision::Segment;
use crate::core::Point2D;
use crate::error::{Error, Result};

/// A planar N-link arm in a specific configuration.
///
/// The pose (joint points) is recomputed on every accepted joint update and
/// never outlives the angles that produced it. When limits are attached,
/// construction and updates are validated: a rejected update leaves the arm
/// untouched.
#[derive(Clone, Debug)]
pub struct Arm {
    geometry: ArmGeometry,
    joint_angles: Vec<f64>,
    joint_limits: Option<JointLimits>,
    points: Vec<Point2D>,
}

impl Arm {
    /// Create an arm from link lengths, initial joint angles (radians) and
    /// optional joint limits.
    pub fn new(
        link_lengths: Vec<f64>,
        initial_angles: Vec<f64>,
        joint_limits: Option<JointLimits>,
    ) -> Result<Self> {
        let geometry = ArmGeometry::new(link_lengths)?;
        Self::from_geometry(geometry, initial_angles, joint_limits)
    }

    /// Create an arm from an existing link set.
    pub fn from_geometry(
        geometry: ArmGeometry,
        initial_angles: Vec<f64>,
        joint_limits: Option<JointLimits>,
    ) -> Result<Self> {
        let links = geometry.n_links();
        if initial_angles.len() != links {
            return Err(Error::LinkAngleMismatch {
                links,
                angles: initial_angles.len(),
            });
        }

        if let Some(limits) = &joint_limits {
            if limits.len() != links {
                return Err(Error::LimitCountMismatch {
                    links,
                    limits: limits.len(),
                });
            }
            if let Some(joint) = limits.first_violation(&initial_angles) {
                return Err(Error::InitialAnglesOutOfLimits {
                    joint,
                    angle: initial_angles[joint],
                });
            }
        }

        let points = geometry.forward_kinematics(&initial_angles);
        debug!(
            "[Arm] created: links={}, reach={:.3}, limits={}",
            links,
            geometry.reach(),
            joint_limits.is_some()
        );

        Ok(Self {
            geometry,
            joint_angles: initial_angles,
            joint_limits,
            points,
        })
    }

    /// Set new joint angles (radians) and recompute the pose.
    ///
    /// On error the arm keeps its previous angles and pose.
    pub fn update_joints(&mut self, angles: &[f64]) -> Result<()> {
        let links = self.geometry.n_links();
        if angles.len() != links {
            return Err(Error::LinkAngleMismatch {
                links,
                angles: angles.len(),
            });
        }

        if let Some(limits) = &self.joint_limits {
            if let Some(joint) = limits.first_violation(angles) {
                let (min, max) = limits.ranges()[joint];
                trace!(
                    "[Arm] rejected update: joint {} angle {:.4} outside [{:.4}, {:.4}]",
                    joint, angles[joint], min, max
                );
                return Err(Error::LimitViolation {
                    joint,
                    angle: angles[joint],
                    min,
                    max,
                });
            }
        }

        self.joint_angles.copy_from_slice(angles);
        self.geometry
            .forward_kinematics_into(&self.joint_angles, &mut self.points);
        Ok(())
    }

    /// Link set
    #[inline]
    pub fn geometry(&self) -> &ArmGeometry {
        &self.geometry
    }

    /// Number of links
    #[inline]
    pub fn n_links(&self) -> usize {
        self.geometry.n_links()
    }

    /// Link lengths, base first
    #[inline]
    pub fn link_lengths(&self) -> &[f64] {
        self.geometry.link_lengths()
    }

    /// Current joint angles (radians)
    #[inline]
    pub fn joint_angles(&self) -> &[f64] {
        &self.joint_angles
    }

    /// Attached joint limits, if any
    #[inline]
    pub fn joint_limits(&self) -> Option<&JointLimits> {
        self.joint_limits.as_ref()
    }

    /// Joint chain of the current pose: base, then every link endpoint
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Alias for [`points`](Self::points)
    #[inline]
    pub fn pose(&self) -> &[Point2D] {
        &self.points
    }

    /// Free endpoint of the last link
    #[inline]
    pub fn end_effector(&self) -> Point2D {
        // Construction guarantees at least one link, so the chain has >= 2 points
        self.points[self.points.len() - 1]
    }

    /// Link segments of the current pose, base first
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }
}
