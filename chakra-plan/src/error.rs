//! Error types for Chakra-Plan.
//!
//! All failures are local and synchronous. An unreachable goal is not an
//! error: the search reports it as [`SearchOutcome::NoPath`](crate::search::SearchOutcome).

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Chakra-Plan error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An arm must have at least one link
    #[error("Arm has no links")]
    EmptyArm,

    /// A link length is zero, negative or not finite
    #[error("Link {link} has invalid length {length} (must be finite and > 0)")]
    InvalidLinkLength {
        /// Link index
        link: usize,
        /// Offending length
        length: f64,
    },

    /// Number of joint angles differs from the number of links
    #[error("Expected {links} joint angles, got {angles}")]
    LinkAngleMismatch {
        /// Number of links on the arm
        links: usize,
        /// Number of angles supplied
        angles: usize,
    },

    /// Joint limits describe a different number of joints than the arm has
    #[error("Joint limits cover {limits} joints but the arm has {links} links")]
    LimitCountMismatch {
        /// Number of links on the arm
        links: usize,
        /// Number of joint ranges supplied
        limits: usize,
    },

    /// A joint range is empty or not finite
    #[error("Joint {joint} has invalid range [{min}, {max}] rad")]
    InvalidLimitRange {
        /// Joint index
        joint: usize,
        /// Lower bound (radians)
        min: f64,
        /// Upper bound (radians)
        max: f64,
    },

    /// Initial configuration violates the joint limits
    #[error("Initial angle {angle:.4} rad of joint {joint} is outside its limits")]
    InitialAnglesOutOfLimits {
        /// Joint index
        joint: usize,
        /// Offending angle (radians)
        angle: f64,
    },

    /// A joint update violates the joint limits; the arm was left unchanged
    #[error("Joint {joint} angle {angle:.4} rad outside limits [{min:.4}, {max:.4}] rad")]
    LimitViolation {
        /// Joint index
        joint: usize,
        /// Requested angle (radians)
        angle: f64,
        /// Lower bound (radians)
        min: f64,
        /// Upper bound (radians)
        max: f64,
    },

    /// A joint angle is NaN or infinite and has no grid cell
    #[error("Joint {joint} angle {angle} is not finite")]
    NonFiniteAngle {
        /// Joint index
        joint: usize,
        /// Offending angle
        angle: f64,
    },

    /// Cell dimensionality disagrees with grid dimensionality
    #[error("Cell has {actual} dimensions but grid has {expected}")]
    DimensionMismatch {
        /// Grid dimensionality
        expected: usize,
        /// Cell dimensionality
        actual: usize,
    },

    /// Cell index outside `0..resolution` on some axis
    #[error("Cell index {index} on axis {axis} is outside 0..{resolution}")]
    CellOutOfBounds {
        /// Axis
        axis: usize,
        /// Offending index
        index: usize,
        /// Grid resolution
        resolution: usize,
    },

    /// Grid resolution of zero
    #[error("Grid resolution must be at least 1")]
    InvalidResolution,

    /// `resolution ^ dims` does not fit in memory addressing
    #[error("Grid of {resolution}^{dims} cells is too large")]
    GridTooLarge {
        /// Number of axes
        dims: usize,
        /// Cells per axis
        resolution: usize,
    },

    /// Cell buffer length does not match the grid shape
    #[error("Grid shape needs {expected} cells, got {actual}")]
    CellCountMismatch {
        /// Cells required by the shape
        expected: usize,
        /// Cells supplied
        actual: usize,
    },
}

impl Error {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyArm => "EMPTY_ARM",
            Self::InvalidLinkLength { .. } => "INVALID_LINK_LENGTH",
            Self::LinkAngleMismatch { .. } => "LINK_ANGLE_MISMATCH",
            Self::LimitCountMismatch { .. } => "LIMIT_COUNT_MISMATCH",
            Self::InvalidLimitRange { .. } => "INVALID_LIMIT_RANGE",
            Self::InitialAnglesOutOfLimits { .. } => "INITIAL_OUT_OF_LIMITS",
            Self::LimitViolation { .. } => "LIMIT_VIOLATION",
            Self::NonFiniteAngle { .. } => "NON_FINITE_ANGLE",
            Self::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            Self::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            Self::InvalidResolution => "INVALID_RESOLUTION",
            Self::GridTooLarge { .. } => "GRID_TOO_LARGE",
            Self::CellCountMismatch { .. } => "CELL_COUNT_MISMATCH",
        }
    }

    /// Check if this error belongs to the arm-construction family.
    ///
    /// `LinkAngleMismatch` is in this family even when it comes from
    /// [`Arm::update_joints`](crate::Arm::update_joints).
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyArm
                | Self::InvalidLinkLength { .. }
                | Self::LinkAngleMismatch { .. }
                | Self::LimitCountMismatch { .. }
                | Self::InvalidLimitRange { .. }
                | Self::InitialAnglesOutOfLimits { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LinkAngleMismatch {
            links: 2,
            angles: 3,
        };
        assert_eq!(err.to_string(), "Expected 2 joint angles, got 3");

        let err = Error::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Cell has 3 dimensions but grid has 2");
    }

    #[test]
    fn test_error_code() {
        assert_eq!(Error::EmptyArm.code(), "EMPTY_ARM");
        assert_eq!(Error::InvalidResolution.code(), "INVALID_RESOLUTION");
        let err = Error::NonFiniteAngle {
            joint: 1,
            angle: f64::INFINITY,
        };
        assert_eq!(err.code(), "NON_FINITE_ANGLE");
        assert_eq!(err.to_string(), "Joint 1 angle inf is not finite");
    }

    #[test]
    fn test_construction_family() {
        assert!(Error::EmptyArm.is_construction_error());
        assert!(
            Error::InitialAnglesOutOfLimits {
                joint: 0,
                angle: 1.0
            }
            .is_construction_error()
        );
        let violation = Error::LimitViolation {
            joint: 0,
            angle: 1.0,
            min: -0.5,
            max: 0.5,
        };
        assert!(!violation.is_construction_error());
    }
}
