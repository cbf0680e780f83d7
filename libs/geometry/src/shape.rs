//! An enumeration of geometric shapes and their properties.

use calcda_algebra::vector2::Vector2;
use serde::{Deserialize, Serialize};

use crate::bbox::{Bbox, BoundingRect};
use crate::circle::Circle;
use crate::contains::Contains;
use crate::intersect::IntersectLine;
use crate::line::{Line, LineType};
use crate::polygon::Polygon;

/// An enumeration of geometric shapes.
///
/// # Examples
///
/// ```
/// # use calcda_geometry::prelude::*;
/// let shapes: Vec<Shape> = vec![
///     Line::segment(Vector2::new(-2., 1.), Vector2::new(2., 1.)).into(),
///     Circle::new(Vector2::ZERO, 1.)?.into(),
/// ];
/// let hits: usize = shapes
///     .iter()
///     .map(|shape| shape.intersect_line(Vector2::ZERO, Vector2::UNIT_Y, LineType::Ray).len())
///     .sum();
/// assert_eq!(hits, 2);
/// # Ok::<(), calcda_geometry::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// A line, ray or segment.
    Line(Line),
    /// A circle.
    Circle(Circle),
    /// A polygon.
    Polygon(Polygon),
}

impl Shape {
    /// If this shape is a line, returns the contained line.
    /// Otherwise, returns [`None`].
    pub fn line(&self) -> Option<&Line> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }

    /// If this shape is a circle, returns the contained circle.
    /// Otherwise, returns [`None`].
    pub fn circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// If this shape is a polygon, returns the contained polygon.
    /// Otherwise, returns [`None`].
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl Bbox for Shape {
    fn bounding_rect(&self) -> BoundingRect {
        match self {
            Shape::Line(line) => line.bounding_rect(),
            Shape::Circle(circle) => circle.bounding_rect(),
            Shape::Polygon(polygon) => polygon.bounding_rect(),
        }
    }
}

impl Contains for Shape {
    fn is_point_inside(&self, point: Vector2) -> bool {
        match self {
            Shape::Line(line) => line.is_point_inside(point),
            Shape::Circle(circle) => circle.is_point_inside(point),
            Shape::Polygon(polygon) => polygon.is_point_inside(point),
        }
    }
}

impl IntersectLine for Shape {
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2> {
        match self {
            Shape::Line(line) => line.intersect_line(a, b, ty),
            Shape::Circle(circle) => circle.intersect_line(a, b, ty),
            Shape::Polygon(polygon) => polygon.intersect_line(a, b, ty),
        }
    }
}

impl From<Line> for Shape {
    #[inline]
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }

    fn shapes() -> [Shape; 3] {
        [
            Line::segment(v(0., 0.), v(2., 2.)).into(),
            Circle::new(v(1., 1.), 1.).unwrap().into(),
            Polygon::from_verts(vec![v(0., 0.), v(2., 0.), v(2., 2.), v(0., 2.)]).into(),
        ]
    }

    #[test]
    fn accessors_match_variant() {
        let [line, circle, polygon] = shapes();
        assert!(line.line().is_some() && line.circle().is_none());
        assert!(circle.circle().is_some() && circle.polygon().is_none());
        assert!(polygon.polygon().is_some() && polygon.line().is_none());
    }

    #[test]
    fn queries_dispatch_to_variant() {
        let expected = BoundingRect::from_corners(v(0., 0.), v(2., 2.));
        for shape in shapes() {
            assert_eq!(shape.bounding_rect(), expected);
            assert!(shape.is_point_inside_bounding_rect(v(2., 0.)));
            assert!(shape.is_point_inside(v(1., 1.)), "{shape:?}");
            assert!(!shape.is_point_inside(v(3., 1.)));
            assert!(!shape.does_line_intersect_bounding_rect(
                v(3., 0.),
                v(3., 1.),
                LineType::Line
            ));
        }
    }

    #[test]
    fn horizontal_line_through_each_shape() {
        let [line, circle, polygon] = shapes();
        let (a, b) = (v(-1., 1.), v(3., 1.));
        assert_eq!(line.intersect_line(a, b, LineType::Segment), vec![v(1., 1.)]);
        let hits: HashSet<_> = circle
            .intersect_line(a, b, LineType::Segment)
            .into_iter()
            .collect();
        assert_eq!(hits, HashSet::from([v(0., 1.), v(2., 1.)]));
        let hits: HashSet<_> = polygon
            .intersect(&Line::segment(a, b))
            .into_iter()
            .collect();
        assert_eq!(hits, HashSet::from([v(0., 1.), v(2., 1.)]));
    }

    #[test]
    fn shapes_key_hash_sets() {
        let mut set: HashSet<Shape> = shapes().into_iter().collect();
        set.extend(shapes());
        assert_eq!(set.len(), 3);
    }
}
