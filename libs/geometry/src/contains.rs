//! Point containment queries.

use calcda_algebra::vector2::Vector2;

/// Provides information on whether a shape contains a point.
pub trait Contains {
    /// Returns true if `point` lies inside this shape.
    ///
    /// Each shape documents whether its boundary counts as inside.
    fn is_point_inside(&self, point: Vector2) -> bool;
}

impl<T> Contains for &T
where
    T: Contains,
{
    fn is_point_inside(&self, point: Vector2) -> bool {
        T::is_point_inside(*self, point)
    }
}
