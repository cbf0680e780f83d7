//! An import prelude that re-exports commonly used items.

pub use calcda_algebra::vector2::Vector2;

pub use crate::bbox::{Bbox, BoundingRect};
pub use crate::circle::Circle;
pub use crate::contains::Contains;
pub use crate::intersect::IntersectLine;
pub use crate::line::{Line, LineType};
pub use crate::polygon::{EdgeIntersection, Polygon};
pub use crate::shape::Shape;
