//! Circles.

use std::hash::{Hash, Hasher};

use calcda_algebra::vector2::Vector2;
use serde::{Deserialize, Serialize};

use crate::bbox::{Bbox, BoundingRect};
use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::intersect::IntersectLine;
use crate::line::LineType;

/// A circle with a finite, strictly positive radius.
///
/// # Examples
///
/// ```
/// # use calcda_geometry::prelude::*;
/// let circle = Circle::new(Vector2::ZERO, 5.)?;
/// assert!(circle.is_point_inside(Vector2::new(3., 3.)));
/// assert!(!circle.is_point_inside(Vector2::new(5., 0.)));
/// assert!(Circle::new(Vector2::ZERO, 0.).is_err());
/// # Ok::<(), calcda_geometry::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleRepr", into = "CircleRepr")]
pub struct Circle {
    origin: Vector2,
    radius: f32,
    bounds: BoundingRect,
}

#[derive(Serialize, Deserialize)]
struct CircleRepr {
    origin: Vector2,
    radius: f32,
}

impl TryFrom<CircleRepr> for Circle {
    type Error = Error;

    fn try_from(value: CircleRepr) -> Result<Self> {
        Self::new(value.origin, value.radius)
    }
}

impl From<Circle> for CircleRepr {
    fn from(value: Circle) -> Self {
        Self {
            origin: value.origin,
            radius: value.radius,
        }
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.radius.to_bits().hash(state);
    }
}

impl Circle {
    /// Creates a circle centered at `origin`.
    ///
    /// Returns [`Error::InvalidRadius`] unless `radius` is finite and positive.
    pub fn new(origin: Vector2, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            tracing::debug!(%origin, radius, "rejecting circle radius");
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self {
            origin,
            radius,
            bounds: BoundingRect::from_corners(
                origin - Vector2::scalar(radius),
                origin + Vector2::scalar(radius),
            ),
        })
    }

    /// The center of the circle.
    #[inline]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// The radius of the circle.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Bbox for Circle {
    #[inline]
    fn bounding_rect(&self) -> BoundingRect {
        self.bounds
    }
}

impl Contains for Circle {
    /// Returns true if `point` lies strictly inside the circle.
    ///
    /// Points on the circumference are outside.
    fn is_point_inside(&self, point: Vector2) -> bool {
        self.is_point_inside_bounding_rect(point)
            && (point - self.origin).length_squared() < self.radius * self.radius
    }
}

impl IntersectLine for Circle {
    /// Returns the points where the line crosses the circumference.
    ///
    /// A tangent line yields a single point. A line whose direction has zero
    /// length yields `a` itself if it lies strictly inside the circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let circle = Circle::new(Vector2::ZERO, 5.)?;
    /// let tangent = circle.intersect_line(
    ///     Vector2::new(-10., 5.),
    ///     Vector2::new(10., 5.),
    ///     LineType::Segment,
    /// );
    /// assert_eq!(tangent, vec![Vector2::new(0., 5.)]);
    /// # Ok::<(), calcda_geometry::Error>(())
    /// ```
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2> {
        let direction = b - a;
        let length_squared = direction.length_squared();
        if length_squared == 0.0 {
            tracing::trace!(%a, %b, "intersecting circle with a zero-length line");
            return if self.is_point_inside(a) {
                vec![a]
            } else {
                Vec::new()
            };
        }
        if !self.does_line_intersect_bounding_rect(a, b, ty) {
            return Vec::new();
        }

        // Project the origin onto the line, then step half a chord either way.
        let offset = a - self.origin;
        let t_closest = -offset.dot(direction) / length_squared;
        let closest = offset + direction * t_closest;
        let half_chord_squared = self.radius * self.radius - closest.length_squared();
        if half_chord_squared < 0.0 {
            return Vec::new();
        }
        let foot = self.origin + closest;
        if half_chord_squared == 0.0 {
            return if ty.admits(t_closest) {
                vec![foot]
            } else {
                Vec::new()
            };
        }

        let length = length_squared.sqrt();
        let unit = direction / length;
        let half_chord = half_chord_squared.sqrt();
        [-half_chord, half_chord]
            .into_iter()
            .filter(|&step| ty.admits(t_closest + step / length))
            .map(|step| foot + unit * step)
            .collect()
    }
}
