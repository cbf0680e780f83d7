//! 3-D vectors.

use serde::{Deserialize, Serialize};

use crate::vector2::Vector2;

/// A vector, or point, in three-dimensional space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
    /// The z-coordinate.
    pub z: f32,
}

impl_vector!(Vector3 { x, y, z }, 3, (f32, f32, f32));

impl Vector3 {
    /// The unit vector along the x-axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// The unit vector along the y-axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The unit vector along the z-axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new [`Vector3`] from (x, y, z) coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Extends a 2-D vector with a z-coordinate.
    #[inline]
    pub const fn from_xy(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Returns the cross product `self × other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_algebra::prelude::*;
    /// assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
    /// assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_X), -Vector3::UNIT_Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The x and y components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The y and z components.
    #[inline]
    pub const fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }

    /// The components in reverse order.
    #[inline]
    pub const fn zyx(&self) -> Self {
        Self::new(self.z, self.y, self.x)
    }
}

impl From<(Vector2, f32)> for Vector3 {
    fn from((xy, z): (Vector2, f32)) -> Self {
        Self::from_xy(xy, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vector3::new(1., 2., 3.);
        let b = Vector3::new(-4., 0., 2.5);
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0.);
        assert_eq!(c.dot(b), 0.);
        assert_eq!(a.cross(a), Vector3::ZERO);
    }

    #[test]
    fn swizzles() {
        let v = Vector3::new(1., 2., 3.);
        assert_eq!(v.xy(), Vector2::new(1., 2.));
        assert_eq!(v.yz(), Vector2::new(2., 3.));
        assert_eq!(v.zyx(), Vector3::new(3., 2., 1.));
        assert_eq!(Vector3::from((Vector2::new(1., 2.), 3.)), v);
    }

    #[test]
    fn length_of_pythagorean_quadruple() {
        assert_eq!(Vector3::new(2., 3., 6.).length(), 7.);
        assert_eq!(Vector3::new(1., 1., 1.).length_squared(), 3.);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Vector3::new(1., 2., 3.).to_string(), "<1.00, 2.00, 3.00>");
    }
}
