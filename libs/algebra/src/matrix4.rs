//! 4x4 matrices for 3-D homogeneous transforms and projections.

use serde::{Deserialize, Serialize};

use crate::angle::Axis;
use crate::matrix3::Matrix3;
use crate::vector3::Vector3;
use crate::vector4::Vector4;

/// A row-major 4x4 matrix.
///
/// Vectors are treated as columns, so `m * v` applies `m` to `v`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix4 {
    rows: [[f32; 4]; 4],
}

impl_matrix_approx!(Matrix4);

impl Matrix4 {
    /// The matrix with every entry set to zero.
    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Returns the entries as an array of rows.
    #[inline]
    pub const fn rows(&self) -> [[f32; 4]; 4] {
        self.rows
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::from(self.rows[i])
    }

    /// Returns column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= 4`.
    pub fn col(&self, j: usize) -> Vector4 {
        Vector4::new(
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        )
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.rows[i][j] = self.rows[j][i];
            }
        }
        result
    }

    /// Computes the adjugate (the transpose of the cofactor matrix) in `f64`.
    fn adjugate_f64(&self) -> [f64; 16] {
        let mut m = [0.0f64; 16];
        for (dst, src) in m.iter_mut().zip(self.rows.iter().flatten()) {
            *dst = f64::from(*src);
        }

        let mut inv = [0.0f64; 16];
        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];
        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];
        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];
        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];
        inv
    }

    /// Expands the determinant along the first row of the adjugate.
    fn determinant_from_adjugate(&self, adjugate: &[f64; 16]) -> f64 {
        let m = &self.rows[0];
        f64::from(m[0]) * adjugate[0]
            + f64::from(m[1]) * adjugate[4]
            + f64::from(m[2]) * adjugate[8]
            + f64::from(m[3]) * adjugate[12]
    }

    /// Computes the adjugate: the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let adjugate = self.adjugate_f64();
        let mut result = Self::ZERO;
        for (dst, src) in result.rows.iter_mut().flatten().zip(adjugate) {
            *dst = src as f32;
        }
        result
    }

    /// Computes the determinant, accumulating in `f64`.
    pub fn determinant(&self) -> f64 {
        self.determinant_from_adjugate(&self.adjugate_f64())
    }

    /// Returns the inverse matrix, or [`None`] if the matrix is singular.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_algebra::prelude::*;
    /// let t = Matrix4::translation(Vector3::new(1., 2., 3.));
    /// assert_eq!(t.inverse(), Some(Matrix4::translation(Vector3::new(-1., -2., -3.))));
    /// assert_eq!(Matrix4::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let adjugate = self.adjugate_f64();
        let determinant = self.determinant_from_adjugate(&adjugate);
        if determinant == 0.0 {
            tracing::trace!(matrix = %self, "cannot invert a singular matrix");
            return None;
        }
        let inverse_determinant = 1.0 / determinant;
        let mut result = Self::ZERO;
        for (dst, src) in result.rows.iter_mut().flatten().zip(adjugate) {
            *dst = (src * inverse_determinant) as f32;
        }
        Some(result)
    }

    /// Returns `self * other⁻¹`, or [`None`] if `other` is singular.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(*self * other.inverse()?)
    }

    /// A rotation of `radians` about `axis`.
    ///
    /// Positive angles rotate clockwise when looking down the axis towards the origin.
    pub fn rotation(axis: Axis, radians: f64) -> Self {
        Self::from(Matrix3::rotation(axis, radians))
    }

    /// A translation by `offset`.
    pub fn translation(offset: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.rows[0][3] = offset.x;
        result.rows[1][3] = offset.y;
        result.rows[2][3] = offset.z;
        result
    }

    /// A scale by `factor` along each axis.
    pub fn scale(factor: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.rows[0][0] = factor.x;
        result.rows[1][1] = factor.y;
        result.rows[2][2] = factor.z;
        result
    }

    /// An orthographic projection of the given view box onto the unit cube.
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [
                2.0 / (right - left),
                0.0,
                0.0,
                -((right + left) / (right - left)),
            ],
            [
                0.0,
                2.0 / (top - bottom),
                0.0,
                -((top + bottom) / (top - bottom)),
            ],
            [
                0.0,
                0.0,
                -2.0 / (far - near),
                -((far + near) / (far - near)),
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// A perspective projection of the given view frustum, in the manner of `glFrustum`.
    pub fn frustum(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [
                (2.0 * near) / (right - left),
                0.0,
                (right + left) / (right - left),
                0.0,
            ],
            [
                0.0,
                (2.0 * near) / (top - bottom),
                (top + bottom) / (top - bottom),
                0.0,
            ],
            [
                0.0,
                0.0,
                (-far - near) / (far - near),
                (-2.0 * near * far) / (far - near),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// A symmetric perspective projection.
    ///
    /// The half-height of the near plane is `near * tan(fov_y)`.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let ymax = near * fov_y.tan();
        let xmax = ymax * aspect_ratio;
        Self::frustum(-xmax, xmax, ymax, -ymax, near, far)
    }

    /// Same as [`Matrix4::perspective`], but with the y-axis pointing down.
    pub fn perspective_flipped_y(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let ymax = near * fov_y.tan();
        let xmax = ymax * aspect_ratio;
        Self::frustum(-xmax, xmax, -ymax, ymax, near, far)
    }

    /// A perspective projection built directly from the view frustum planes.
    ///
    /// Produces the same matrix as [`Matrix4::frustum`].
    pub fn projection(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [
                (2.0 * near) / (right - left),
                0.0,
                (right + left) / (right - left),
                0.0,
            ],
            [
                0.0,
                (2.0 * near) / (top - bottom),
                (top + bottom) / (top - bottom),
                0.0,
            ],
            [
                0.0,
                0.0,
                -(far + near) / (far - near),
                (-2.0 * far * near) / (far - near),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// A view matrix for a camera at `eye` looking at `center`.
    ///
    /// Returns [`None`] if `eye == center` or if `up` is parallel to the view direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_algebra::prelude::*;
    /// let view = Matrix4::look_at(Vector3::new(0., 0., 5.), Vector3::ZERO, Vector3::UNIT_Y).unwrap();
    /// assert_eq!(view * Vector4::new(0., 0., 0., 1.), Vector4::new(0., 0., -5., 1.));
    /// assert_eq!(Matrix4::look_at(Vector3::ZERO, Vector3::ZERO, Vector3::UNIT_Y), None);
    /// ```
    pub fn look_at(eye: Vector3, center: Vector3, up: Vector3) -> Option<Self> {
        let forward = (center - eye).normalize()?;
        let side = forward.cross(up).normalize()?;
        let top = side.cross(forward);
        let orientation = Self::from_rows([
            [side.x, side.y, side.z, 0.0],
            [top.x, top.y, top.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        Some(orientation * Self::translation(-eye))
    }
}

impl From<Matrix3> for Matrix4 {
    /// Embeds `value` in the upper-left block, with a one in the last diagonal entry.
    fn from(value: Matrix3) -> Self {
        let mut result = Self::IDENTITY;
        for (i, row) in value.rows().iter().enumerate() {
            result.rows[i][..3].copy_from_slice(row);
        }
        result
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.rows[i][j] += self.rows[i][k] * rhs.rows[k][j];
                }
            }
        }
        result
    }
}

impl std::ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Self::Output {
        Vector4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}
