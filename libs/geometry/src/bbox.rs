//! Axis-aligned bounding rectangles.

use approx::{AbsDiffEq, RelativeEq};
use calcda_algebra::vector2::Vector2;
use serde::{Deserialize, Serialize};

use crate::line::{Line, LineType};

/// An axis-aligned rectangle, inclusive of its boundary.
///
/// The lower-left corner never exceeds the upper-right corner on either axis.
///
/// # Examples
///
/// ```
/// # use calcda_geometry::prelude::*;
/// let rect = BoundingRect::from_corners(Vector2::new(2., -1.), Vector2::new(0., 3.));
/// assert_eq!(rect.min(), Vector2::new(0., -1.));
/// assert_eq!(rect.max(), Vector2::new(2., 3.));
/// assert!(rect.contains_point(Vector2::new(2., 3.)));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RectRepr", into = "RectRepr")]
pub struct BoundingRect {
    min: Vector2,
    max: Vector2,
}

#[derive(Serialize, Deserialize)]
struct RectRepr {
    min: Vector2,
    max: Vector2,
}

impl From<RectRepr> for BoundingRect {
    fn from(value: RectRepr) -> Self {
        Self::from_corners(value.min, value.max)
    }
}

impl From<BoundingRect> for RectRepr {
    fn from(value: BoundingRect) -> Self {
        Self {
            min: value.min,
            max: value.max,
        }
    }
}

impl BoundingRect {
    /// Creates the smallest rectangle containing two opposite corners.
    #[inline]
    pub fn from_corners(a: Vector2, b: Vector2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates the degenerate rectangle containing only `point`.
    #[inline]
    pub fn from_point(point: Vector2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest rectangle containing every point in `points`.
    ///
    /// Returns [`None`] if `points` is empty.
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |rect, p| Self {
            min: rect.min.min(p),
            max: rect.max.max(p),
        }))
    }

    /// The lower-left corner.
    #[inline]
    pub fn min(&self) -> Vector2 {
        self.min
    }

    /// The upper-right corner.
    #[inline]
    pub fn max(&self) -> Vector2 {
        self.max
    }

    /// Returns true if `p` lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains_point(&self, p: Vector2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// The four sides of the rectangle, as segments.
    ///
    /// The bottom and left sides start at the lower-left corner; the right and
    /// top sides end at the upper-right corner.
    pub fn edges(&self) -> [Line; 4] {
        let lower_right = Vector2::new(self.max.x, self.min.y);
        let upper_left = Vector2::new(self.min.x, self.max.y);
        [
            Line::segment(self.min, lower_right),
            Line::segment(self.min, upper_left),
            Line::segment(lower_right, self.max),
            Line::segment(upper_left, self.max),
        ]
    }

    /// Returns true if either endpoint lies in the rectangle, or if the
    /// line, ray or segment from `a` through `b` crosses one of its sides.
    ///
    /// # Examples
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let rect = BoundingRect::from_corners(Vector2::ZERO, Vector2::ONE);
    /// let (a, b) = (Vector2::new(-1., 0.5), Vector2::new(-0.5, 0.5));
    /// assert!(!rect.intersects_line(a, b, LineType::Segment));
    /// assert!(rect.intersects_line(a, b, LineType::Ray));
    /// ```
    pub fn intersects_line(&self, a: Vector2, b: Vector2, ty: LineType) -> bool {
        self.contains_point(a)
            || self.contains_point(b)
            || self.edges().iter().any(|edge| {
                Line::intersect_raw(edge.begin(), edge.end(), LineType::Segment, a, b, ty)
                    .is_some()
            })
    }
}

impl AbsDiffEq for BoundingRect {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl RelativeEq for BoundingRect {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}

/// A geometric shape that caches an axis-aligned bounding rectangle.
///
/// The provided methods are cheap rejection tests; a `false` answer rules out
/// any overlap with the shape itself.
///
/// # Examples
///
/// ```
/// # use calcda_geometry::prelude::*;
/// let line = Line::segment(Vector2::new(3., 0.), Vector2::new(1., 2.));
/// assert_eq!(
///     line.bounding_rect(),
///     BoundingRect::from_corners(Vector2::new(1., 0.), Vector2::new(3., 2.)),
/// );
/// assert!(line.is_point_inside_bounding_rect(Vector2::new(2., 2.)));
/// ```
pub trait Bbox {
    /// Returns the axis-aligned bounding rectangle.
    fn bounding_rect(&self) -> BoundingRect;

    /// Returns true if `p` lies within the bounding rectangle, boundary included.
    #[inline]
    fn is_point_inside_bounding_rect(&self, p: Vector2) -> bool {
        self.bounding_rect().contains_point(p)
    }

    /// Returns true if the line, ray or segment from `a` through `b` touches
    /// the bounding rectangle.
    #[inline]
    fn does_line_intersect_bounding_rect(&self, a: Vector2, b: Vector2, ty: LineType) -> bool {
        self.bounding_rect().intersects_line(a, b, ty)
    }
}

impl<T> Bbox for &T
where
    T: Bbox,
{
    fn bounding_rect(&self) -> BoundingRect {
        T::bounding_rect(*self)
    }
}

impl Bbox for BoundingRect {
    #[inline]
    fn bounding_rect(&self) -> BoundingRect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    fn unit() -> BoundingRect {
        BoundingRect::from_corners(Vector2::ZERO, Vector2::ONE)
    }

    #[test]
    fn contains_point_is_inclusive() {
        let rect = unit();
        for p in [
            Vector2::ZERO,
            Vector2::ONE,
            Vector2::new(0., 1.),
            Vector2::new(0.5, 0.25),
        ] {
            assert!(rect.contains_point(p), "{p} should be inside");
        }
        for p in [
            Vector2::new(-0.001, 0.5),
            Vector2::new(0.5, 1.001),
            Vector2::new(2., 2.),
        ] {
            assert!(!rect.contains_point(p), "{p} should be outside");
        }
    }

    #[test]
    fn from_points_takes_componentwise_extremes() {
        let rect = BoundingRect::from_points([
            Vector2::new(1., 5.),
            Vector2::new(-2., 3.),
            Vector2::new(4., -1.),
        ])
        .unwrap();
        assert_eq!(rect.min(), Vector2::new(-2., -1.));
        assert_eq!(rect.max(), Vector2::new(4., 5.));
        assert_eq!(BoundingRect::from_points(Vec::new()), None);
    }

    #[test]
    fn edges_share_corners() {
        let [bottom, left, right, top] = unit().edges();
        assert_eq!(bottom.points(), (Vector2::ZERO, Vector2::UNIT_X));
        assert_eq!(left.points(), (Vector2::ZERO, Vector2::UNIT_Y));
        assert_eq!(right.points(), (Vector2::UNIT_X, Vector2::ONE));
        assert_eq!(top.points(), (Vector2::UNIT_Y, Vector2::ONE));
    }

    #[test]
    fn line_crossing_without_endpoints_inside() {
        let rect = unit();
        let a = Vector2::new(-1., 0.5);
        let b = Vector2::new(2., 0.5);
        assert!(rect.intersects_line(a, b, LineType::Segment));
        let a = Vector2::new(-1., 2.);
        let b = Vector2::new(2., 2.);
        assert!(!rect.intersects_line(a, b, LineType::Line));
    }

    #[test]
    fn deserialization_normalizes_corners() {
        let rect: BoundingRect =
            serde_json::from_str(r#"{"min":{"x":1.0,"y":1.0},"max":{"x":0.0,"y":0.0}}"#).unwrap();
        assert_relative_eq!(rect, unit());
    }
}
