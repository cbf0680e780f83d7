//! An import prelude that re-exports commonly used items.

pub use crate::angle::Axis;
pub use crate::matrix3::Matrix3;
pub use crate::matrix4::Matrix4;
pub use crate::vector2::Vector2;
pub use crate::vector3::Vector3;
pub use crate::vector4::Vector4;
