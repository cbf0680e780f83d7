//! 2-D lines, circles and polygons with intersection and containment queries.
//!
//! # Examples
//!
//! Find where a ray leaves a [polygon](crate::polygon::Polygon):
//!
//! ```
//! # use calcda_geometry::prelude::*;
//! let square = Polygon::from_verts(vec![
//!     Vector2::new(0., 0.),
//!     Vector2::new(0., 1.),
//!     Vector2::new(1., 1.),
//!     Vector2::new(1., 0.),
//! ]);
//! let center = Vector2::new(0.5, 0.5);
//! assert!(square.is_point_inside(center));
//! assert_eq!(
//!     square.intersect_line(center, Vector2::new(1.5, 0.5), LineType::Ray),
//!     vec![Vector2::new(1., 0.5)],
//! );
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod circle;
pub mod contains;
pub mod error;
pub mod intersect;
pub mod line;
pub mod polygon;
pub mod prelude;
pub mod shape;

pub use error::{Error, Result};
