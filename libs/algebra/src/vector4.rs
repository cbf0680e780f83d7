//! 4-D vectors, typically homogeneous 3-D coordinates.

use serde::{Deserialize, Serialize};

use crate::vector2::Vector2;
use crate::vector3::Vector3;

/// A four-component vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4 {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
    /// The z-coordinate.
    pub z: f32,
    /// The w-coordinate.
    pub w: f32,
}

impl_vector!(Vector4 { x, y, z, w }, 4, (f32, f32, f32, f32));

impl Vector4 {
    /// The unit vector along the x-axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The unit vector along the y-axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The unit vector along the z-axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The unit vector along the w-axis.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new [`Vector4`] from (x, y, z, w) coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extends a 3-D vector with a w-coordinate.
    ///
    /// ```
    /// # use calcda_algebra::prelude::*;
    /// let p = Vector4::from_xyz(Vector3::new(1., 2., 3.), 1.);
    /// assert_eq!(p, Vector4::new(1., 2., 3., 1.));
    /// ```
    #[inline]
    pub const fn from_xyz(xyz: Vector3, w: f32) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// The x and y components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The z and w components.
    #[inline]
    pub const fn zw(&self) -> Vector2 {
        Vector2::new(self.z, self.w)
    }

    /// The x, y and z components.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The y, z and w components.
    #[inline]
    pub const fn yzw(&self) -> Vector3 {
        Vector3::new(self.y, self.z, self.w)
    }

    /// The components in reverse order.
    #[inline]
    pub const fn wzyx(&self) -> Self {
        Self::new(self.w, self.z, self.y, self.x)
    }
}

impl From<(Vector3, f32)> for Vector4 {
    fn from((xyz, w): (Vector3, f32)) -> Self {
        Self::from_xyz(xyz, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swizzles() {
        let v = Vector4::new(1., 2., 3., 4.);
        assert_eq!(v.xy(), Vector2::new(1., 2.));
        assert_eq!(v.zw(), Vector2::new(3., 4.));
        assert_eq!(v.xyz(), Vector3::new(1., 2., 3.));
        assert_eq!(v.yzw(), Vector3::new(2., 3., 4.));
        assert_eq!(v.wzyx(), Vector4::new(4., 3., 2., 1.));
    }

    #[test]
    fn dot_and_length() {
        let v = Vector4::new(1., 1., 1., 1.);
        assert_eq!(v.dot(Vector4::new(1., 2., 3., 4.)), 10.);
        assert_eq!(v.length(), 2.);
        assert_eq!(Vector4::from((Vector3::ONE, 1.)), v);
    }
}
