//! 2-D vectors.

use serde::{Deserialize, Serialize};

/// A vector, or point, in two-dimensional space.
///
/// # Examples
///
/// ```
/// # use calcda_algebra::prelude::*;
/// let v = Vector2::new(3., 4.);
/// assert_eq!(v.length(), 5.);
/// assert_eq!(v + Vector2::ONE, Vector2::new(4., 5.));
/// assert_eq!(v.yx(), Vector2::new(4., 3.));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
}

impl_vector!(Vector2 { x, y }, 2, (f32, f32));

impl Vector2 {
    /// The unit vector along the x-axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// The unit vector along the y-axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a new [`Vector2`] from (x, y) coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the vector with its x and y components swapped.
    #[inline]
    pub const fn yx(&self) -> Self {
        Self::new(self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::default(), Vector2::new(0., 0.));
    }

    #[test]
    fn scalar_sets_both_components() {
        assert_eq!(Vector2::scalar(7.5), Vector2::new(7.5, 7.5));
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vector2::new(1., 2.);
        let b = Vector2::new(3., -4.);
        assert_eq!(a + b, Vector2::new(4., -2.));
        assert_eq!(a - b, Vector2::new(-2., 6.));
        assert_eq!(a * b, Vector2::new(3., -8.));
        assert_eq!(b / a, Vector2::new(3., -2.));
        assert_eq!(a * 2., Vector2::new(2., 4.));
        assert_eq!(2. * a, Vector2::new(2., 4.));
        assert_eq!(b / 2., Vector2::new(1.5, -2.));
        assert_eq!(-a, Vector2::new(-1., -2.));

        let mut c = a;
        c += b;
        c -= Vector2::ONE;
        c *= 2.;
        assert_eq!(c, Vector2::new(6., -6.));
    }

    #[test]
    fn lengths() {
        let v = Vector2::new(3., 4.);
        assert_eq!(v.length(), 5.);
        assert_eq!(v.length_squared(), 25.);
        assert_eq!(Vector2::ZERO.distance(v), 5.);
        assert_eq!(v.dot(Vector2::new(2., -1.)), 2.);
    }

    #[test]
    fn normalize_rejects_zero_length() {
        assert_eq!(Vector2::ZERO.normalize(), None);
        let n = Vector2::new(0., -8.).normalize().unwrap();
        assert_eq!(n, Vector2::new(0., -1.));
        assert_relative_eq!(Vector2::new(1., 1.).normalize().unwrap().length(), 1.);
    }

    #[test]
    fn clamp_min_max_lerp() {
        let v = Vector2::new(-3., 9.);
        assert_eq!(v.clamp(Vector2::ZERO, Vector2::scalar(5.)), Vector2::new(0., 5.));
        assert_eq!(v.min(Vector2::ZERO), Vector2::new(-3., 0.));
        assert_eq!(v.max(Vector2::ZERO), Vector2::new(0., 9.));
        assert_eq!(
            Vector2::ZERO.lerp(Vector2::new(10., -10.), 0.25),
            Vector2::new(2.5, -2.5)
        );
        assert_eq!(v.abs(), Vector2::new(3., 9.));
        assert_eq!(Vector2::new(4., 9.).sqrt(), Vector2::new(2., 3.));
    }

    #[test]
    fn reflect_off_horizontal_surface() {
        let v = Vector2::new(1., -1.);
        assert_eq!(v.reflect(Vector2::UNIT_Y), Vector2::new(1., 1.));
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Vector2::new(0., 1.));
        set.insert(Vector2::new(-0., 1.));
        set.insert(Vector2::new(1., 0.));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn conversions() {
        let v = Vector2::from([1., 2.]);
        assert_eq!(v, Vector2::from((1., 2.)));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1., 2.]);
        let tuple: (f32, f32) = v.into();
        assert_eq!(tuple, (1., 2.));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Vector2::new(1., -2.5).to_string(), "<1.00, -2.50>");
    }
}
