//! Angle units and coordinate axes.

use serde::{Deserialize, Serialize};

/// The value of π used by all angle conversions in this crate.
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.14159265359;

/// An enumeration of the three coordinate axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Axis {
    /// The x-axis.
    X,
    /// The y-axis.
    Y,
    /// The z-axis.
    Z,
}

/// Converts an angle in degrees to radians.
///
/// # Example
///
/// ```
/// use calcda_algebra::angle::{degree_to_radian, PI};
/// use approx::assert_relative_eq;
///
/// assert_relative_eq!(degree_to_radian(180.), PI, max_relative = 1e-6);
/// assert_eq!(degree_to_radian(0.), 0.);
/// ```
#[inline]
pub fn degree_to_radian(degree: f32) -> f32 {
    degree * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radian_to_degree(radian: f32) -> f32 {
    radian / (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn conversions_round_trip() {
        for degree in [-720., -90., 0., 45., 90., 360.] {
            assert_relative_eq!(
                radian_to_degree(degree_to_radian(degree)),
                degree,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn right_angle() {
        assert_relative_eq!(degree_to_radian(90.), PI / 2., max_relative = 1e-6);
        assert_relative_eq!(radian_to_degree(PI / 2.), 90., max_relative = 1e-6);
    }
}
