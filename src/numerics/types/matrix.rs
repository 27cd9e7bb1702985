// src/numerics/types/matrix.rs
// Square matrix generic over its side length and element type.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Signed;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::{FloatingPoint, Scalar};
use super::vector::Vector;
use crate::error::{NumericsError, Result};

/// Matrix is a `DIM`×`DIM` grid of scalars stored as `DIM` rows.
///
/// Indexing is two-step: `m[row]` yields the row array, `m[row][col]` the
/// element. Equality is exact; use [`Matrix::approx_eq`] or the `approx`
/// traits for a tolerant comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<const DIM: usize, T: Scalar = f32> {
    rows: [[T; DIM]; DIM],
}

pub type Matrix2x2<T = f32> = Matrix<2, T>;
pub type Matrix3x3<T = f32> = Matrix<3, T>;
pub type Matrix4x4<T = f32> = Matrix<4, T>;

impl<const DIM: usize, T: Scalar> Matrix<DIM, T> {
    pub const fn new(rows: [[T; DIM]; DIM]) -> Self {
        Self { rows }
    }

    /// Construct a new matrix from its rows
    pub const fn from_rows(rows: [[T; DIM]; DIM]) -> Self {
        Self { rows }
    }

    /// Construct a new matrix from its columns
    pub fn from_columns(columns: [[T; DIM]; DIM]) -> Self {
        Self { rows: columns }.transpose()
    }

    /// Construct from `DIM * DIM` elements in row-major order.
    pub fn try_from_slice(elements: &[T]) -> Result<Self> {
        if elements.len() != DIM * DIM {
            return Err(NumericsError::LengthMismatch {
                expected: DIM * DIM,
                found: elements.len(),
            });
        }
        let mut m = Self::zero();
        for (dst, &src) in m.iter_mut().zip(elements) {
            *dst = src;
        }
        Ok(m)
    }

    /// Zero matrix
    pub const fn zero() -> Self {
        Self { rows: [[T::ZERO; DIM]; DIM] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..DIM {
            m.rows[i][i] = T::ONE;
        }
        m
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; DIM] {
        self.rows[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; DIM] {
        self.rows.map(|row| row[idx])
    }

    pub fn rows(&self) -> &[[T; DIM]; DIM] {
        &self.rows
    }

    /// Rows and columns swapped. Pure rearrangement, so applying it twice
    /// reproduces the original exactly.
    pub fn transpose(&self) -> Self {
        let mut t = *self;
        for i in 0..DIM {
            for j in 0..DIM {
                t.rows[i][j] = self.rows[j][i];
            }
        }
        t
    }

    /// Elements in row-major order
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.rows.as_flattened().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.rows.as_flattened_mut().iter_mut()
    }

    /// Element-wise comparison with the `Vector` tolerance rules.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.iter().zip(other).all(|(&a, &b)| a.approx_eq(b))
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.rows.swap(r1, r2);
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: T) {
        for elem in &mut self.rows[row] {
            *elem *= scalar;
        }
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: T) {
        let source = self.rows[source];
        for (elem, s) in self.rows[target].iter_mut().zip(source) {
            *elem += s * scalar;
        }
    }

    // Copies every element outside `remove_row`/`remove_col` into a matrix of
    // side `R`. Callers guarantee `R + 1 == DIM`.
    fn reduced<const R: usize>(&self, remove_row: usize, remove_col: usize) -> Matrix<R, T> {
        debug_assert!(
            remove_row < DIM && remove_col < DIM,
            "reduced matrix index ({remove_row}, {remove_col}) out of range for side {DIM}"
        );
        let mut reduced = Matrix::<R, T>::zero();
        let kept_rows = self.rows.iter().enumerate().filter(|&(i, _)| i != remove_row);
        for (dst, (_, src)) in reduced.rows.iter_mut().zip(kept_rows) {
            let kept = src.iter().enumerate().filter(|&(j, _)| j != remove_col);
            for (d, (_, &s)) in dst.iter_mut().zip(kept) {
                *d = s;
            }
        }
        reduced
    }
}

// `get_reduced_mat` only exists where the minor has a valid side length, so
// asking for the minor of a 0x0 matrix is a compile error.
macro_rules! impl_reduced_mat {
    ($($dim:literal => $minor:literal),* $(,)?) => {
        $(
            impl<T: Scalar> Matrix<$dim, T> {
                /// The matrix with `remove_row` and `remove_col` deleted.
                ///
                /// Both indices must be below the side length; debug builds
                /// panic otherwise.
                pub fn get_reduced_mat(&self, remove_row: usize, remove_col: usize) -> Matrix<$minor, T> {
                    self.reduced::<$minor>(remove_row, remove_col)
                }
            }
        )*
    };
}

impl_reduced_mat!(1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

impl<T: Scalar + Signed> Matrix<1, T> {
    pub fn determinant(&self) -> T {
        self.rows[0][0]
    }
}

impl<T: Scalar + Signed> Matrix<2, T> {
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }
}

// Cofactor expansion down the first column. Cost is factorial in the side
// length, which stays small here.
macro_rules! impl_cofactor_determinant {
    ($($dim:literal),* $(,)?) => {
        $(
            impl<T: Scalar + Signed> Matrix<$dim, T> {
                pub fn determinant(&self) -> T {
                    let mut det = T::ZERO;
                    for i in 0..$dim {
                        let term = self.rows[i][0] * self.get_reduced_mat(i, 0).determinant();
                        if i & 1 == 0 {
                            det += term;
                        } else {
                            det -= term;
                        }
                    }
                    det
                }
            }
        )*
    };
}

impl_cofactor_determinant!(3, 4, 5, 6, 7, 8);

impl<const DIM: usize, T: Scalar> Default for Matrix<DIM, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const DIM: usize, T: Scalar> From<[[T; DIM]; DIM]> for Matrix<DIM, T> {
    fn from(rows: [[T; DIM]; DIM]) -> Self {
        Self::new(rows)
    }
}

impl<const DIM: usize, T: Scalar> From<Matrix<DIM, T>> for [[T; DIM]; DIM] {
    fn from(m: Matrix<DIM, T>) -> Self {
        m.rows
    }
}

impl<const DIM: usize, T: Scalar> Index<usize> for Matrix<DIM, T> {
    type Output = [T; DIM];

    #[inline]
    fn index(&self, row: usize) -> &[T; DIM] {
        &self.rows[row]
    }
}

impl<const DIM: usize, T: Scalar> IndexMut<usize> for Matrix<DIM, T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; DIM] {
        &mut self.rows[row]
    }
}

impl<'a, const DIM: usize, T: Scalar> IntoIterator for &'a Matrix<DIM, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, const DIM: usize, T: Scalar> IntoIterator for &'a mut Matrix<DIM, T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<const DIM: usize, T> AbsDiffEq for Matrix<DIM, T>
where
    T: FloatingPoint + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.iter().zip(other).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const DIM: usize, T> RelativeEq for Matrix<DIM, T>
where
    T: FloatingPoint + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const DIM: usize, T: Scalar> AddAssign for Matrix<DIM, T> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, &rhs) in self.iter_mut().zip(&rhs) {
            *lhs += rhs;
        }
    }
}

impl<const DIM: usize, T: Scalar> SubAssign for Matrix<DIM, T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, &rhs) in self.iter_mut().zip(&rhs) {
            *lhs -= rhs;
        }
    }
}

impl<const DIM: usize, T: Scalar> MulAssign<T> for Matrix<DIM, T> {
    fn mul_assign(&mut self, scalar: T) {
        for elem in self.iter_mut() {
            *elem *= scalar;
        }
    }
}

impl<const DIM: usize, T: Scalar> MulAssign for Matrix<DIM, T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const DIM: usize, T: Scalar> Add for Matrix<DIM, T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<const DIM: usize, T: Scalar> Sub for Matrix<DIM, T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<const DIM: usize, T: Scalar> Mul<T> for Matrix<DIM, T> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<const DIM: usize, T: Scalar> Mul for Matrix<DIM, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                for k in 0..DIM {
                    result.rows[i][j] += self.rows[i][k] * rhs.rows[k][j];
                }
            }
        }
        result
    }
}

impl<const DIM: usize, T: Scalar> Mul<Vector<T, DIM>> for Matrix<DIM, T> {
    type Output = Vector<T, DIM>;

    fn mul(self, rhs: Vector<T, DIM>) -> Vector<T, DIM> {
        let mut result = Vector::zero();
        for (i, row) in self.rows.iter().enumerate() {
            result[i] = Vector::new(*row).dot(&rhs);
        }
        result
    }
}

impl<const DIM: usize, T: Scalar> Mul<Matrix<DIM, T>> for Vector<T, DIM> {
    type Output = Vector<T, DIM>;

    fn mul(self, rhs: Matrix<DIM, T>) -> Vector<T, DIM> {
        let mut result = Vector::zero();
        for j in 0..DIM {
            result[j] = Vector::new(rhs.column(j)).dot(&self);
        }
        result
    }
}

// scalar * matrix for every primitive element type
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const DIM: usize> Mul<Matrix<DIM, $t>> for $t {
                type Output = Matrix<DIM, $t>;

                fn mul(self, rhs: Matrix<DIM, $t>) -> Matrix<DIM, $t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Serialized as a flat row-major tuple of DIM * DIM elements.
impl<const DIM: usize, T> Serialize for Matrix<DIM, T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(DIM * DIM)?;
        for elem in self {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

impl<'de, const DIM: usize, T> Deserialize<'de> for Matrix<DIM, T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementVisitor<const DIM: usize, T>(PhantomData<T>);

        impl<'de, const DIM: usize, T> Visitor<'de> for ElementVisitor<DIM, T>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Matrix<DIM, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {} matrix elements", DIM * DIM)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut m = Matrix::zero();
                for (i, elem) in m.iter_mut().enumerate() {
                    *elem = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(DIM * DIM, ElementVisitor::<DIM, T>(PhantomData))
    }
}
