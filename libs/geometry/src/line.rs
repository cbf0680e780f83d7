//! Directed lines, rays and segments.

use calcda_algebra::vector2::Vector2;
use serde::{Deserialize, Serialize};

use crate::bbox::{Bbox, BoundingRect};
use crate::contains::Contains;
use crate::intersect::IntersectLine;

/// How far a [`Line`] extends from its two defining points.
///
/// A point on a line is located by a parameter `t`, where `t = 0` is the
/// beginning and `t = 1` is the end.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum LineType {
    /// Extends infinitely in both directions.
    Line,
    /// Starts at the beginning and extends infinitely past the end.
    Ray,
    /// Spans exactly from the beginning to the end.
    Segment,
}

impl LineType {
    /// Returns true if the parameter `t` falls within a line of this type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// assert!(LineType::Line.admits(-3.));
    /// assert!(LineType::Ray.admits(3.));
    /// assert!(!LineType::Ray.admits(-0.5));
    /// assert!(LineType::Segment.admits(1.));
    /// assert!(!LineType::Segment.admits(1.5));
    /// ```
    #[inline]
    pub fn admits(self, t: f32) -> bool {
        match self {
            Self::Line => true,
            Self::Ray => t >= 0.0,
            Self::Segment => (0.0..=1.0).contains(&t),
        }
    }
}

/// Checks the solved parameters of two intersecting lines against their types.
fn admits_pair(l1t: LineType, t1: f32, l2t: LineType, t2: f32) -> bool {
    match (l1t, l2t) {
        // A ray only meets a full line behind its beginning.
        (LineType::Ray, LineType::Line) => t1 <= 0.0,
        (LineType::Line, LineType::Ray) => t2 <= 0.0,
        _ => l1t.admits(t1) && l2t.admits(t2),
    }
}

/// A directed line, ray or segment through two points.
///
/// # Examples
///
/// ```
/// # use calcda_geometry::prelude::*;
/// let diagonal = Line::segment(Vector2::ZERO, Vector2::new(2., 2.));
/// let hits = diagonal.intersect_line(Vector2::new(0., 2.), Vector2::new(2., 0.), LineType::Segment);
/// assert_eq!(hits, vec![Vector2::new(1., 1.)]);
/// assert!(diagonal.is_point_inside(Vector2::new(0.5, 0.5)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LineRepr", into = "LineRepr")]
pub struct Line {
    begin: Vector2,
    end: Vector2,
    ty: LineType,
    bounds: BoundingRect,
}

#[derive(Serialize, Deserialize)]
struct LineRepr {
    begin: Vector2,
    end: Vector2,
    #[serde(rename = "type")]
    ty: LineType,
}

impl From<LineRepr> for Line {
    fn from(value: LineRepr) -> Self {
        Self::new(value.begin, value.end, value.ty)
    }
}

impl From<Line> for LineRepr {
    fn from(value: Line) -> Self {
        Self {
            begin: value.begin,
            end: value.end,
            ty: value.ty,
        }
    }
}

impl Line {
    /// Creates a line of type `ty` from `begin` through `end`.
    pub fn new(begin: Vector2, end: Vector2, ty: LineType) -> Self {
        Self {
            begin,
            end,
            ty,
            bounds: BoundingRect::from_corners(begin, end),
        }
    }

    /// Creates a segment from `begin` to `end`.
    #[inline]
    pub fn segment(begin: Vector2, end: Vector2) -> Self {
        Self::new(begin, end, LineType::Segment)
    }

    /// Creates a ray starting at `begin` and passing through `end`.
    #[inline]
    pub fn ray(begin: Vector2, end: Vector2) -> Self {
        Self::new(begin, end, LineType::Ray)
    }

    /// Creates an unbounded line through `begin` and `end`.
    #[inline]
    pub fn line(begin: Vector2, end: Vector2) -> Self {
        Self::new(begin, end, LineType::Line)
    }

    /// The point at `t = 0`.
    #[inline]
    pub fn begin(&self) -> Vector2 {
        self.begin
    }

    /// The point at `t = 1`.
    #[inline]
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Returns the defining points as `(begin, end)`.
    #[inline]
    pub fn points(&self) -> (Vector2, Vector2) {
        (self.begin, self.end)
    }

    /// The extent of the line.
    #[inline]
    pub fn line_type(&self) -> LineType {
        self.ty
    }

    /// Intersects `self` with `other`.
    #[inline]
    pub fn intersect_with(&self, other: &Line) -> Option<Vector2> {
        Self::intersect_raw(
            self.begin, self.end, self.ty, other.begin, other.end, other.ty,
        )
    }

    /// Intersects the line `l1a → l1b` of type `l1t` with the line
    /// `l2a → l2b` of type `l2t`.
    ///
    /// Returns [`None`] if the lines are parallel (collinear lines included),
    /// or if the crossing lies outside the extent of either line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let p = Line::intersect_raw(
    ///     Vector2::new(0., 1.), Vector2::new(4., 1.), LineType::Segment,
    ///     Vector2::new(2., 0.), Vector2::new(2., 3.), LineType::Segment,
    /// );
    /// assert_eq!(p, Some(Vector2::new(2., 1.)));
    ///
    /// let parallel = Line::intersect_raw(
    ///     Vector2::ZERO, Vector2::UNIT_X, LineType::Line,
    ///     Vector2::UNIT_Y, Vector2::ONE, LineType::Line,
    /// );
    /// assert_eq!(parallel, None);
    /// ```
    pub fn intersect_raw(
        l1a: Vector2,
        l1b: Vector2,
        l1t: LineType,
        l2a: Vector2,
        l2b: Vector2,
        l2t: LineType,
    ) -> Option<Vector2> {
        let v1 = l1a - l1b;
        let v2 = l2a - l2b;
        let determinant = v2.y * v1.x - v1.y * v2.x;
        if determinant == 0.0 {
            tracing::trace!(%l1a, %l1b, %l2a, %l2b, "lines are parallel");
            return None;
        }

        let inverse = 1.0 / determinant;
        let sd = l1a - l2a;
        let t1 = inverse * (sd.x * v2.y - sd.y * v2.x);
        let t2 = inverse * (sd.x * v1.y - sd.y * v1.x);

        admits_pair(l1t, t1, l2t, t2).then(|| l1a - v1 * t1)
    }
}

impl Bbox for Line {
    #[inline]
    fn bounding_rect(&self) -> BoundingRect {
        self.bounds
    }
}

impl Contains for Line {
    /// Returns true if `point` lies on the line and within its bounding rectangle.
    ///
    /// Uses exact floating-point comparisons.
    fn is_point_inside(&self, point: Vector2) -> bool {
        if !self.is_point_inside_bounding_rect(point) {
            return false;
        }
        let direction = self.end - self.begin;
        if direction.x == 0.0 {
            return point.x == self.begin.x;
        }
        let slope = direction.y / direction.x;
        slope * (point.x - self.begin.x) + self.begin.y == point.y
    }
}

impl IntersectLine for Line {
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2> {
        Self::intersect_raw(self.begin, self.end, self.ty, a, b, ty)
            .into_iter()
            .collect()
    }
}
