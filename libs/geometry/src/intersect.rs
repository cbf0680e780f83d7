//! Intersections of shapes with lines.

use calcda_algebra::vector2::Vector2;

use crate::line::{Line, LineType};

/// Trait for calculating where a line, ray or segment crosses a shape.
pub trait IntersectLine {
    /// Returns the points where the line of type `ty` from `a` through `b`
    /// crosses this shape.
    ///
    /// No point appears twice. The order of the points is unspecified.
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2>;

    /// Same as [`IntersectLine::intersect_line`], taking the query as a [`Line`].
    #[inline]
    fn intersect(&self, line: &Line) -> Vec<Vector2> {
        self.intersect_line(line.begin(), line.end(), line.line_type())
    }
}

impl<T> IntersectLine for &T
where
    T: IntersectLine,
{
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2> {
        T::intersect_line(*self, a, b, ty)
    }
}
