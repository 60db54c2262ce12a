//! Angle utilities and the joint-grid discretization.
//!
//! All angles are in radians. Grid index `i` on an axis of resolution `M`
//! stands for the joint angle `2π·i/M − π`, so index 0 is −π and the axis
//! wraps back to −π after index `M − 1`.

use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Joint angle represented by grid index `index` at `resolution` cells per axis.
///
/// # Example
/// ```
/// use chakra_plan::core::math::index_to_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(index_to_angle(0, 100), -PI);
/// assert!(index_to_angle(50, 100).abs() < 1e-12);
/// ```
#[inline]
pub fn index_to_angle(index: usize, resolution: usize) -> f64 {
    TWO_PI * index as f64 / resolution as f64 - PI
}

/// Nearest grid index for `angle`, wrapping the angle into the periodic domain.
///
/// Exact inverse of [`index_to_angle`] for every index in `0..resolution`.
/// Returns 0 for a zero resolution or a non-finite angle; callers that take
/// angles from outside check finiteness first, as
/// [`angles_to_cell`](crate::trajectory::angles_to_cell) does.
///
/// # Example
/// ```
/// use chakra_plan::core::math::{angle_to_index, index_to_angle};
/// use std::f64::consts::PI;
///
/// assert_eq!(angle_to_index(index_to_angle(37, 100), 100), 37);
/// // +π is the same joint angle as -π
/// assert_eq!(angle_to_index(PI, 100), 0);
/// ```
#[inline]
pub fn angle_to_index(angle: f64, resolution: usize) -> usize {
    if resolution == 0 || !angle.is_finite() {
        return 0;
    }
    let m = resolution as f64;
    let scaled = ((angle + PI) * m / TWO_PI).round().rem_euclid(m);
    (scaled as usize).min(resolution - 1)
}
