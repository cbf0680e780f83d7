//! 3x3 matrices, used for 3-D linear maps and 2-D homogeneous transforms.

use serde::{Deserialize, Serialize};

use crate::angle::Axis;
use crate::vector2::Vector2;
use crate::vector3::Vector3;

/// A row-major 3x3 matrix.
///
/// `matrix[(row, col)]` addresses a single entry. Vectors are treated as
/// columns, so `m * v` applies `m` to `v`.
///
/// # Example
///
/// ```
/// # use calcda_algebra::prelude::*;
/// let m = Matrix3::translation(Vector2::new(5., -2.)) * Matrix3::scale(Vector2::new(2., 2.));
/// assert_eq!(m * Vector2::new(1., 1.), Vector2::new(7., 0.));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    rows: [[f32; 3]; 3],
}

impl_matrix_approx!(Matrix3);

impl Matrix3 {
    /// The matrix with every entry set to zero.
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the entries as an array of rows.
    #[inline]
    pub const fn rows(&self) -> [[f32; 3]; 3] {
        self.rows
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from(self.rows[i])
    }

    /// Returns column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= 3`.
    pub fn col(&self, j: usize) -> Vector3 {
        Vector3::new(self.rows[0][j], self.rows[1][j], self.rows[2][j])
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Computes the determinant, accumulating in `f64`.
    pub fn determinant(&self) -> f64 {
        let m = self.rows.map(|row| row.map(f64::from));
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the adjugate: the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let m = &self.rows;
        let cofactors = Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
            ],
            [
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            ],
            [
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ]);
        cofactors.transpose()
    }

    /// Returns the inverse matrix, or [`None`] if the matrix is singular.
    ///
    /// # Example
    ///
    /// ```
    /// # use calcda_algebra::prelude::*;
    /// let m = Matrix3::scale(Vector2::new(2., 4.));
    /// assert_eq!(m.inverse(), Some(Matrix3::scale(Vector2::new(0.5, 0.25))));
    /// assert_eq!(Matrix3::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            tracing::trace!(matrix = %self, "cannot invert a singular matrix");
            return None;
        }
        let inverse_determinant = 1.0 / determinant;
        let adjugate = self.adjugate();
        Some(Self::from_rows(adjugate.rows.map(|row| {
            row.map(|v| (f64::from(v) * inverse_determinant) as f32)
        })))
    }

    /// Returns `self * other⁻¹`, or [`None`] if `other` is singular.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(*self * other.inverse()?)
    }

    /// A rotation of `radians` about `axis`.
    ///
    /// Positive angles rotate clockwise when looking down the axis towards the origin.
    pub fn rotation(axis: Axis, radians: f64) -> Self {
        let (s, c) = (-radians).sin_cos();
        let (s, c) = (s as f32, c as f32);
        match axis {
            Axis::X => Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]),
            Axis::Y => Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]),
            Axis::Z => Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]),
        }
    }

    /// A 2-D homogeneous translation by `offset`.
    pub fn translation(offset: Vector2) -> Self {
        let mut result = Self::IDENTITY;
        result.rows[0][2] = offset.x;
        result.rows[1][2] = offset.y;
        result
    }

    /// A 2-D homogeneous scale by `factor`.
    pub fn scale(factor: Vector2) -> Self {
        let mut result = Self::IDENTITY;
        result.rows[0][0] = factor.x;
        result.rows[1][1] = factor.y;
        result
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result.rows[i][j] += self.rows[i][k] * rhs.rows[k][j];
                }
            }
        }
        result
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Self::Output {
        Vector3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl std::ops::Mul<Vector2> for Matrix3 {
    type Output = Vector2;

    /// Transforms a 2-D point in homogeneous coordinates.
    fn mul(self, v: Vector2) -> Self::Output {
        let v = self * Vector3::from_xy(v, 1.0);
        v.xy() / v.z
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    fn sample() -> Matrix3 {
        Matrix3::from_rows([[2., -1., 0.], [1., 3., 4.], [0., 5., -2.]])
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert_eq!(m * Matrix3::IDENTITY, m);
        assert_eq!(Matrix3::IDENTITY * m, m);
        let v = Vector3::new(1., -2., 3.);
        assert_eq!(Matrix3::IDENTITY * v, v);
    }

    #[test]
    fn multiplication_is_row_by_column() {
        let a = Matrix3::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        let b = Matrix3::from_rows([[9., 8., 7.], [6., 5., 4.], [3., 2., 1.]]);
        assert_eq!(
            a * b,
            Matrix3::from_rows([[30., 24., 18.], [84., 69., 54.], [138., 114., 90.]])
        );
        assert_eq!(a * Vector3::new(1., 0., -1.), Vector3::new(-2., -2., -2.));
    }

    #[test]
    fn determinant_and_inverse() {
        let m = sample();
        // 2 * (3 * -2 - 4 * 5) - (-1) * (1 * -2 - 0) + 0 = -52 - 2
        assert_eq!(m.determinant(), -54.);
        let inv = m.inverse().unwrap();
        assert_relative_eq!(m * inv, Matrix3::IDENTITY, epsilon = 1e-5);
        assert_relative_eq!(inv * m, Matrix3::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix3::from_rows([[1., 2., 3.], [2., 4., 6.], [0., 1., 1.]]);
        assert_eq!(m.determinant(), 0.);
        assert_eq!(m.inverse(), None);
        assert_eq!(sample().checked_div(&m), None);
    }

    #[test]
    fn division_multiplies_by_inverse() {
        let m = sample();
        assert_relative_eq!(m.checked_div(&m).unwrap(), Matrix3::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = sample();
        assert_eq!(m.transpose().row(1), m.col(1));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m[(2, 1)], 5.);
    }

    #[test]
    fn rotations_are_orthonormal() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let r = Matrix3::rotation(axis, 0.7);
            assert_relative_eq!(r * r.transpose(), Matrix3::IDENTITY, epsilon = 1e-5);
            assert_relative_eq!(r.determinant(), 1., epsilon = 1e-6);
        }
    }

    #[test]
    fn z_rotation_is_clockwise() {
        let r = Matrix3::rotation(Axis::Z, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r * Vector3::UNIT_X, -Vector3::UNIT_Y, epsilon = 1e-6);
    }

    #[test]
    fn homogeneous_transforms() {
        let p = Vector2::new(1., 2.);
        assert_eq!(Matrix3::translation(Vector2::new(3., -1.)) * p, Vector2::new(4., 1.));
        assert_eq!(Matrix3::scale(Vector2::new(2., 3.)) * p, Vector2::new(2., 6.));
    }

    #[test]
    fn negation_and_display() {
        assert_eq!(-Matrix3::IDENTITY * Vector3::ONE, -Vector3::ONE);
        assert_eq!(
            Matrix3::IDENTITY.to_string(),
            "[{1.00, 0.00, 0.00}, {0.00, 1.00, 0.00}, {0.00, 0.00, 1.00}]"
        );
    }
}
