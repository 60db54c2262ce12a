//! Per-joint admissible angle ranges.

use serde::{Deserialize, Serialize};

use crate::core::math::deg_to_rad;
use crate::error::{Error, Result};

/// Inclusive `[min, max]` range per joint, stored in RADIANS.
///
/// Degree-denominated ranges are converted once by [`JointLimits::from_degrees`];
/// every comparison afterwards is radians against radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    ranges: Vec<(f64, f64)>,
}

impl JointLimits {
    /// Create limits from `(min, max)` pairs in radians.
    ///
    /// Fails with [`Error::InvalidLimitRange`] if a bound is not finite or
    /// `min > max`.
    pub fn new(ranges: Vec<(f64, f64)>) -> Result<Self> {
        for (joint, &(min, max)) in ranges.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(Error::InvalidLimitRange { joint, min, max });
            }
        }
        Ok(Self { ranges })
    }

    /// Create limits from `(min, max)` pairs in degrees.
    pub fn from_degrees(ranges_deg: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            ranges_deg
                .iter()
                .map(|&(min, max)| (deg_to_rad(min), deg_to_rad(max)))
                .collect(),
        )
    }

    /// Number of joints covered
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether no joint is covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges in radians
    #[inline]
    pub fn ranges(&self) -> &[(f64, f64)] {
        &self.ranges
    }

    /// Range of one joint in radians
    #[inline]
    pub fn range(&self, joint: usize) -> Option<(f64, f64)> {
        self.ranges.get(joint).copied()
    }

    /// Check an angle vector against the limits.
    ///
    /// A length mismatch is reported as `false`, never as an error, so the
    /// gate can be used uniformly in hot loops.
    #[inline]
    pub fn is_within_limits(&self, angles: &[f64]) -> bool {
        angles.len() == self.ranges.len() && self.first_violation(angles).is_none()
    }

    /// Index of the first joint whose angle is outside its range.
    ///
    /// Only the joints present in both `angles` and the limits are compared;
    /// use [`is_within_limits`](Self::is_within_limits) when lengths may differ.
    pub fn first_violation(&self, angles: &[f64]) -> Option<usize> {
        angles
            .iter()
            .zip(&self.ranges)
            .position(|(angle, &(min, max))| !(min..=max).contains(angle))
    }
}
