//! Small `f32` vector and matrix types for 2-D and 3-D math.
//!
//! # Examples
//!
//! Transform a point with a homogeneous [matrix](crate::matrix3::Matrix3):
//!
//! ```
//! # use calcda_algebra::prelude::*;
//! let m = Matrix3::translation(Vector2::new(1., 2.));
//! assert_eq!(m * Vector2::new(3., 4.), Vector2::new(4., 6.));
//! ```
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod integer;
pub mod matrix3;
pub mod matrix4;
pub mod prelude;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use error::{Error, Result};
