//! Polygons given as a closed loop of vertices.

use calcda_algebra::vector2::Vector2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::bbox::{Bbox, BoundingRect};
use crate::contains::Contains;
use crate::intersect::IntersectLine;
use crate::line::{Line, LineType};

/// A polygon, with vertices given in order.
///
/// The last vertex implicitly connects back to the first.
/// A polygon with fewer than two vertices has no edges.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Vector2>", into = "Vec<Vector2>")]
pub struct Polygon {
    points: Vec<Vector2>,
    bounds: BoundingRect,
}

/// An intersection point together with the polygon edge that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeIntersection {
    /// The point of intersection.
    pub intersection: Vector2,
    /// The polygon edge containing the point.
    pub segment: Line,
}

impl Polygon {
    /// Creates a polygon with given vertices.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let triangle = Polygon::from_verts(vec![
    ///     Vector2::new(0., 0.),
    ///     Vector2::new(4., 0.),
    ///     Vector2::new(0., 3.),
    /// ]);
    /// assert_eq!(triangle.len(), 3);
    /// assert_eq!(triangle.bounding_rect().max(), Vector2::new(4., 3.));
    /// ```
    pub fn from_verts(points: Vec<Vector2>) -> Self {
        let bounds = BoundingRect::from_points(points.iter().copied()).unwrap_or_default();
        Self { points, bounds }
    }

    /// The vertices, in order.
    #[inline]
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// The number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the edges as segments, beginning with the closing edge
    /// from the last vertex to the first.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let square = Polygon::from_verts(vec![
    ///     Vector2::new(0., 0.),
    ///     Vector2::new(0., 1.),
    ///     Vector2::new(1., 1.),
    ///     Vector2::new(1., 0.),
    /// ]);
    /// let edges: Vec<_> = square.edges().collect();
    /// assert_eq!(edges.len(), 4);
    /// assert_eq!(edges[0].points(), (Vector2::new(1., 0.), Vector2::new(0., 0.)));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let closing = match self.points.as_slice() {
            [first, .., last] => Some(Line::segment(*last, *first)),
            _ => None,
        };
        closing.into_iter().chain(
            self.points
                .windows(2)
                .map(|pair| Line::segment(pair[0], pair[1])),
        )
    }

    /// Returns every edge crossing of the line of type `ty` from `a` through
    /// `b`, tagged with the edge it lies on.
    ///
    /// A point where the line crosses two edges appears once per edge.
    /// The order of the results is unspecified.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let square = Polygon::from_verts(vec![
    ///     Vector2::new(0., 0.),
    ///     Vector2::new(0., 1.),
    ///     Vector2::new(1., 1.),
    ///     Vector2::new(1., 0.),
    /// ]);
    /// let (a, b) = (Vector2::new(-1., -1.), Vector2::new(2., 2.));
    /// // Both diagonal corners are shared by two edges.
    /// assert_eq!(square.intersect_line_ex(a, b, LineType::Segment).len(), 4);
    /// assert_eq!(square.intersect_line(a, b, LineType::Segment).len(), 2);
    /// ```
    pub fn intersect_line_ex(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<EdgeIntersection> {
        if self.points.len() < 2 {
            tracing::trace!(
                vertices = self.points.len(),
                "polygon has no edges to intersect"
            );
            return Vec::new();
        }
        let mut hits = IndexSet::new();
        for segment in self.edges() {
            if let Some(intersection) = cross_edge(a, b, ty, &segment) {
                hits.insert(EdgeIntersection {
                    intersection,
                    segment,
                });
            }
        }
        hits.into_iter().collect()
    }
}

/// Intersects the query line with a polygon edge, which is always a segment.
fn cross_edge(a: Vector2, b: Vector2, ty: LineType, edge: &Line) -> Option<Vector2> {
    Line::intersect_raw(a, b, ty, edge.begin(), edge.end(), LineType::Segment)
}

impl From<Vec<Vector2>> for Polygon {
    #[inline]
    fn from(value: Vec<Vector2>) -> Self {
        Self::from_verts(value)
    }
}

impl From<Polygon> for Vec<Vector2> {
    #[inline]
    fn from(value: Polygon) -> Self {
        value.points
    }
}

impl FromIterator<Vector2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vector2>>(iter: I) -> Self {
        Self::from_verts(iter.into_iter().collect())
    }
}

impl Bbox for Polygon {
    #[inline]
    fn bounding_rect(&self) -> BoundingRect {
        self.bounds
    }
}

impl Contains for Polygon {
    /// Casts a ray from `point` towards positive x and returns true if it
    /// crosses the boundary an odd number of times.
    ///
    /// A crossing through a vertex shared by two edges counts once. Points on
    /// the boundary may be reported either way.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_geometry::prelude::*;
    /// let triangle: Polygon = [
    ///     Vector2::new(0., 0.),
    ///     Vector2::new(4., 0.),
    ///     Vector2::new(0., 4.),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert!(triangle.is_point_inside(Vector2::new(1., 1.)));
    /// assert!(!triangle.is_point_inside(Vector2::new(3., 3.)));
    /// ```
    fn is_point_inside(&self, point: Vector2) -> bool {
        if !self.is_point_inside_bounding_rect(point) {
            return false;
        }
        let crossings = self.intersect_line(point, point + Vector2::UNIT_X, LineType::Ray);
        crossings.len() % 2 == 1
    }
}

impl IntersectLine for Polygon {
    fn intersect_line(&self, a: Vector2, b: Vector2, ty: LineType) -> Vec<Vector2> {
        if self.points.len() < 2 {
            tracing::trace!(
                vertices = self.points.len(),
                "polygon has no edges to intersect"
            );
            return Vec::new();
        }
        let mut hits = IndexSet::new();
        for edge in self.edges() {
            if let Some(p) = cross_edge(a, b, ty, &edge) {
                hits.insert(p);
            }
        }
        hits.into_iter().collect()
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

    fn unit_square() -> Polygon {
        Polygon::from_verts(vec![v(0., 0.), v(0., 1.), v(1., 1.), v(1., 0.)])
    }

    fn set<T: std::hash::Hash + Eq>(items: Vec<T>) -> HashSet<T> {
        items.into_iter().collect()
    }

    #[test]
    fn ray_through_unit_square() {
        let hits = unit_square().intersect_line(v(0.25, -0.5), v(1., 1.), LineType::Ray);
        assert_eq!(hits.len(), 2);
        assert_eq!(set(hits), set(vec![v(1., 1.), v(0.5, 0.)]));
    }

    #[test]
    fn shared_vertex_is_reported_per_edge() {
        let square = unit_square();
        let hits = square.intersect_line_ex(v(0.25, -0.5), v(1., 1.), LineType::Ray);
        assert_eq!(hits.len(), 3);
        let corner: Vec<_> = hits
            .iter()
            .filter(|hit| hit.intersection == v(1., 1.))
            .map(|hit| hit.segment)
            .collect();
        assert_eq!(
            set(corner),
            set(vec![
                Line::segment(v(0., 1.), v(1., 1.)),
                Line::segment(v(1., 1.), v(1., 0.)),
            ])
        );
        assert!(hits.contains(&EdgeIntersection {
            intersection: v(0.5, 0.),
            segment: Line::segment(v(1., 0.), v(0., 0.)),
        }));
    }

    #[test]
    fn centroid_of_convex_polygon_is_inside() {
        let polygons = [
            unit_square(),
            Polygon::from_verts(vec![v(0., 0.), v(4., 0.), v(0., 4.)]),
            Polygon::from_verts(vec![
                v(2., 0.),
                v(4., 1.),
                v(4., 3.),
                v(2., 4.),
                v(0., 3.),
                v(0., 1.),
            ]),
        ];
        for polygon in polygons {
            let sum = polygon
                .points()
                .iter()
                .fold(Vector2::ZERO, |acc, &p| acc + p);
            let centroid = sum / polygon.len() as f32;
            assert!(polygon.is_point_inside(centroid), "{centroid} in {polygon:?}");
        }
    }

    #[test]
    fn points_outside_bounding_rect_are_outside() {
        let square = unit_square();
        for p in [v(-0.5, 0.5), v(0.5, 1.5), v(2., 2.), v(-1., -1.)] {
            assert!(!square.is_point_inside(p));
        }
    }

    #[test]
    fn concave_notch_is_outside() {
        let notched = Polygon::from_verts(vec![
            v(0., 0.),
            v(0., 4.),
            v(4., 4.),
            v(4., 0.),
            v(2.5, 0.),
            v(2.5, 2.),
            v(1.5, 2.),
            v(1.5, 0.),
        ]);
        assert!(!notched.is_point_inside(v(2., 1.)));
        assert!(notched.is_point_inside(v(0.5, 1.)));
        assert!(notched.is_point_inside(v(2., 3.)));
    }

    #[test]
    fn degenerate_polygons_have_no_edges() {
        let empty = Polygon::default();
        assert!(empty.is_empty());
        assert_eq!(empty.edges().count(), 0);
        assert!(empty
            .intersect_line(v(-1., 0.), v(1., 0.), LineType::Line)
            .is_empty());
        assert!(!empty.is_point_inside(Vector2::ZERO));

        let single = Polygon::from_verts(vec![v(1., 1.)]);
        assert_eq!(single.edges().count(), 0);
        assert_eq!(single.bounding_rect().min(), single.bounding_rect().max());
        assert!(single
            .intersect_line_ex(v(0., 0.), v(2., 2.), LineType::Segment)
            .is_empty());
        assert!(!single.is_point_inside(v(1., 1.)));
    }

    #[test]
    fn two_vertices_form_a_doubled_edge() {
        let polygon = Polygon::from_verts(vec![v(0., 0.), v(2., 0.)]);
        assert_eq!(polygon.edges().count(), 2);
        let hits = polygon.intersect_line_ex(v(1., -1.), v(1., 1.), LineType::Segment);
        assert_eq!(hits.len(), 2);
        assert_eq!(
            polygon.intersect_line(v(1., -1.), v(1., 1.), LineType::Segment),
            vec![v(1., 0.)]
        );
    }

    #[test]
    fn bounding_rect_spans_all_vertices() {
        let polygon: Polygon = vec![v(3., -1.), v(-2., 4.), v(0., 0.)].into();
        assert_eq!(polygon.bounding_rect().min(), v(-2., -1.));
        assert_eq!(polygon.bounding_rect().max(), v(3., 4.));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Polygon::from_verts(vec![v(0., 0.), v(1., 0.), v(0., 1.)]);
        let b = Polygon::from_verts(vec![v(1., 0.), v(0., 1.), v(0., 0.)]);
        assert_ne!(a, b);
        assert_eq!(set(vec![a.clone(), a.clone(), b]).len(), 2);
    }

    #[test]
    fn serializes_as_vertex_list() {
        let square = unit_square();
        let json = serde_json::to_string(&square).unwrap();
        assert!(json.starts_with('['));
        let back: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, square);
        assert_eq!(back.bounding_rect(), square.bounding_rect());
    }
}
