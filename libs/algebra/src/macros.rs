//! Code generation shared by the fixed-size vector and matrix types.

/// Returns the bit pattern of `value`, with `-0.0` folded onto `0.0`.
///
/// Used to keep [`Hash`] consistent with `==` on float components.
#[inline]
pub(crate) fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Generates the componentwise API of an `f32` vector type.
macro_rules! impl_vector {
    ($VectorN:ident { $($field:ident),+ }, $n:expr, $Tuple:ty) => {
        impl $VectorN {
            /// The vector with every component set to zero.
            pub const ZERO: Self = Self::scalar(0.0);

            /// The vector with every component set to one.
            pub const ONE: Self = Self::scalar(1.0);

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn scalar(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// Returns the dot product of `self` and `other`.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Returns the squared Euclidean length of the vector.
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Returns the Euclidean length of the vector.
            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns the Euclidean distance between `self` and `other`.
            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                (self - other).length()
            }

            /// Returns the unit vector pointing in the same direction.
            ///
            /// Returns [`None`] if the vector has zero length.
            pub fn normalize(self) -> Option<Self> {
                let length = self.length();
                if length == 0.0 {
                    tracing::trace!(vector = %self, "cannot normalize a zero-length vector");
                    return None;
                }
                Some(self / length)
            }

            /// Returns the vector with every component made non-negative.
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Returns the vector with every component replaced by its square root.
            #[inline]
            pub fn sqrt(self) -> Self {
                Self { $($field: self.$field.sqrt()),+ }
            }

            /// Returns the componentwise minimum of `self` and `other`.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: if self.$field < other.$field { self.$field } else { other.$field }),+ }
            }

            /// Returns the componentwise maximum of `self` and `other`.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: if self.$field > other.$field { self.$field } else { other.$field }),+ }
            }

            /// Restricts every component to the range given by `min` and `max`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                self.min(max).max(min)
            }

            /// Linearly interpolates from `self` towards `other`.
            ///
            /// An `amount` of `0` yields `self`; an `amount` of `1` yields `other`.
            #[inline]
            pub fn lerp(self, other: Self, amount: f32) -> Self {
                Self { $($field: self.$field + (other.$field - self.$field) * amount),+ }
            }

            /// Reflects the vector off a surface with the given normal.
            ///
            /// `surface` is expected to be normalized.
            #[inline]
            pub fn reflect(self, surface: Self) -> Self {
                self - surface * (2.0 * self.dot(surface))
            }

            /// Returns the components as an array.
            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }
        }

        impl std::ops::Add for $VectorN {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::AddAssign for $VectorN {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl std::ops::Sub for $VectorN {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::SubAssign for $VectorN {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl std::ops::Mul for $VectorN {
            type Output = Self;

            /// Multiplies the two vectors element wise.
            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::MulAssign for $VectorN {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field *= rhs.$field;)+
            }
        }

        impl std::ops::Mul<f32> for $VectorN {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$VectorN> for f32 {
            type Output = $VectorN;
            #[inline]
            fn mul(self, rhs: $VectorN) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f32> for $VectorN {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl std::ops::Div for $VectorN {
            type Output = Self;

            /// Divides the two vectors element wise.
            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::DivAssign for $VectorN {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field /= rhs.$field;)+
            }
        }

        impl std::ops::Div<f32> for $VectorN {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::DivAssign<f32> for $VectorN {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$field /= rhs;)+
            }
        }

        impl std::ops::Neg for $VectorN {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        // Equality is exact; `NaN` components make a vector unequal to itself.
        impl Eq for $VectorN {}

        impl std::hash::Hash for $VectorN {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(std::hash::Hash::hash(&$crate::macros::canonical_bits(self.$field), state);)+
            }
        }

        impl From<[f32; $n]> for $VectorN {
            #[inline]
            fn from(value: [f32; $n]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }

        impl From<$VectorN> for [f32; $n] {
            #[inline]
            fn from(value: $VectorN) -> Self {
                value.to_array()
            }
        }

        impl From<$Tuple> for $VectorN {
            #[inline]
            fn from(value: $Tuple) -> Self {
                let ($($field),+) = value;
                Self { $($field),+ }
            }
        }

        impl From<$VectorN> for $Tuple {
            #[inline]
            fn from(value: $VectorN) -> Self {
                ($(value.$field),+)
            }
        }

        impl std::fmt::Display for $VectorN {
            /// Formats the vector as `<x, y, ...>` with two decimal places.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(format!("{:.2}", self.$field)),+];
                write!(f, "<{}>", parts.join(", "))
            }
        }

        impl approx::AbsDiffEq for $VectorN {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl approx::RelativeEq for $VectorN {
            fn default_max_relative() -> f32 {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                true $(&& approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }

        impl approx::UlpsEq for $VectorN {
            fn default_max_ulps() -> u32 {
                <f32 as approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                true $(&& approx::UlpsEq::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))+
            }
        }
    };
}

/// Generates tolerance comparisons for a square matrix stored as `rows`.
macro_rules! impl_matrix_approx {
    ($MatrixN:ident) => {
        impl approx::AbsDiffEq for $MatrixN {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.rows
                    .iter()
                    .flatten()
                    .zip(other.rows.iter().flatten())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl approx::RelativeEq for $MatrixN {
            fn default_max_relative() -> f32 {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.rows
                    .iter()
                    .flatten()
                    .zip(other.rows.iter().flatten())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl approx::UlpsEq for $MatrixN {
            fn default_max_ulps() -> u32 {
                <f32 as approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.rows
                    .iter()
                    .flatten()
                    .zip(other.rows.iter().flatten())
                    .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }

        impl std::fmt::Display for $MatrixN {
            /// Formats the matrix row by row as `[{a, b}, {c, d}]` with two decimal places.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let rows = self
                    .rows
                    .iter()
                    .map(|row| {
                        let cells = row.iter().map(|v| format!("{:.2}", v)).collect::<Vec<_>>();
                        format!("{{{}}}", cells.join(", "))
                    })
                    .collect::<Vec<_>>();
                write!(f, "[{}]", rows.join(", "))
            }
        }

        impl std::ops::Index<(usize, usize)> for $MatrixN {
            type Output = f32;
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                &self.rows[row][col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $MatrixN {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                &mut self.rows[row][col]
            }
        }

        impl std::ops::Neg for $MatrixN {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self {
                    rows: self.rows.map(|row| row.map(|v| -v)),
                }
            }
        }

        impl std::ops::MulAssign for $MatrixN {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}
