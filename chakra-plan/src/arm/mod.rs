//! Kinematic model and joint-limit gate of a planar serial arm.
//!
//! - [`ArmGeometry`]: immutable link set with pure forward kinematics
//! - [`JointLimits`]: inclusive per-joint ranges (radians)
//! - [`Arm`]: geometry + current angles + optional limits + current pose
//!
//! ```rust
//! use chakra_plan::arm::{Arm, JointLimits};
//!
//! let limits = JointLimits::from_degrees(&[(-90.0, 90.0), (-180.0, 90.0)])?;
//! let mut arm = Arm::new(vec![1.0, 1.0], vec![0.0, 0.0], Some(limits))?;
//!
//! arm.update_joints(&[0.3, -0.2])?;
//! assert!(arm.update_joints(&[2.0, 0.0]).is_err()); // joint 0 beyond 90°
//! assert_eq!(arm.joint_angles(), &[0.3, -0.2]);
//! # Ok::<(), chakra_plan::Error>(())
//! ```

mod geometry;
mod limits;
mod model;

pub use geometry::ArmGeometry;
pub use limits::JointLimits;
pub use model::Arm;
