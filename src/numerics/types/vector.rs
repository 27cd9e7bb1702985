// src/numerics/types/vector.rs
// Fixed-dimension vector generic over its element type.
// Uses the Scalar/FloatingPoint traits from super::traits.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::AsPrimitive;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::traits::{FloatingPoint, Scalar};
use crate::error::{NumericsError, Result};
use crate::numerics::kernel;

/// Vector is an ordered, fixed-length sequence of `DIM` scalar elements.
///
/// The dimension is part of the type, so combining vectors of different
/// dimensions does not compile. Equality is exact for integer elements and
/// tolerant (per component, within [`FloatingPoint::EQUALITY_THRESHOLD`]) for
/// floating point elements.
#[derive(Copy, Clone, Debug)]
pub struct Vector<T: Scalar, const DIM: usize> {
    elems: [T; DIM],
}

/// Builds a [`Vector`] from its components.
///
/// `vector![1.0, 2.0, 3.0]` keeps the literal type, `vector![f32; 1, 2, 3]`
/// converts every component to the named element type.
#[macro_export]
macro_rules! vector {
    ($($x:expr),+ $(,)?) => {
        $crate::numerics::types::vector::Vector::new([$($x),+])
    };
    ($t:ty; $($x:expr),+ $(,)?) => {
        $crate::numerics::types::vector::Vector::new([
            $($crate::__num_traits::AsPrimitive::<$t>::as_($x)),+
        ])
    };
}

impl<T: Scalar, const DIM: usize> Vector<T, DIM> {
    /// Construct a new vector from its components
    #[inline]
    pub const fn new(elems: [T; DIM]) -> Self {
        Self { elems }
    }

    /// Vector of all zeros
    #[inline]
    pub const fn zero() -> Self {
        Self { elems: [T::ZERO; DIM] }
    }

    /// Vector with every component set to `value`
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { elems: [value; DIM] }
    }

    /// Construct from components of another primitive type, converting each
    /// one with an `as` cast.
    pub fn from_values<U>(values: [U; DIM]) -> Self
    where
        U: AsPrimitive<T>,
    {
        Self::new(values.map(AsPrimitive::as_))
    }

    /// Convert every component to another element type.
    pub fn cast<U>(self) -> Vector<U, DIM>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        self.map(AsPrimitive::as_)
    }

    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, f: F) -> Vector<U, DIM> {
        Vector::new(self.elems.map(f))
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        DIM
    }

    #[inline]
    pub fn as_array(&self) -> &[T; DIM] {
        &self.elems
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    /// Sum of component-wise products
    pub fn dot(&self, other: &Self) -> T {
        self.elems
            .iter()
            .zip(&other.elems)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length.
    ///
    /// Integer components are promoted to floating point before squaring, so
    /// the result never truncates.
    pub fn length(&self) -> T::Real {
        kernel::sqrt(self.map(Scalar::to_real).length_squared())
    }

    /// Scale to unit length.
    ///
    /// A zero-length or non-finite vector has no direction; the result is then
    /// a NaN vector.
    pub fn unit_vector(&self) -> Vector<T::Real, DIM> {
        self.try_unit_vector().unwrap_or_else(|err| {
            debug!(dim = DIM, %err, "normalizing a vector without direction");
            Vector::splat(<T::Real as FloatingPoint>::NAN)
        })
    }

    /// Like [`Vector::unit_vector`] but reports a zero-length or non-finite
    /// input.
    ///
    /// Components are first divided by the largest magnitude, so vectors whose
    /// squared length would overflow or underflow still normalize.
    pub fn try_unit_vector(&self) -> Result<Vector<T::Real, DIM>> {
        let real = self.map(Scalar::to_real);
        if let Some(&bad) = real.iter().find(|c| !c.is_finite()) {
            return Err(NumericsError::NonFinite { value: bad.to_f64() });
        }

        let largest = real.iter().fold(<T::Real as Scalar>::ZERO, |acc, &c| {
            let magnitude = c.abs();
            if magnitude > acc { magnitude } else { acc }
        });
        if largest.is_zero() {
            return Err(NumericsError::ZeroLength);
        }

        let scaled = real / largest;
        Ok(scaled / scaled.length())
    }

    /// Divide by a scalar, rejecting a zero divisor.
    pub fn checked_div(self, rhs: T) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumericsError::DivisionByZero);
        }
        Ok(self / rhs)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Standard right-handed cross product. Only defined in three dimensions.
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.elems;
        let [bx, by, bz] = rhs.elems;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

pub fn dot<T: Scalar, const DIM: usize>(lhs: &Vector<T, DIM>, rhs: &Vector<T, DIM>) -> T {
    lhs.dot(rhs)
}

pub fn cross<T: Scalar>(lhs: &Vector<T, 3>, rhs: &Vector<T, 3>) -> Vector<T, 3> {
    lhs.cross(rhs)
}

pub fn unit_vector<T: Scalar, const DIM: usize>(vec: &Vector<T, DIM>) -> Vector<T::Real, DIM> {
    vec.unit_vector()
}

impl<T: Scalar, const DIM: usize> Default for Vector<T, DIM> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const DIM: usize> PartialEq for Vector<T, DIM> {
    fn eq(&self, other: &Self) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(&a, &b)| a.approx_eq(b))
    }
}

impl<T, const DIM: usize> AbsDiffEq for Vector<T, DIM>
where
    T: FloatingPoint + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const DIM: usize> RelativeEq for Vector<T, DIM>
where
    T: FloatingPoint + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.elems
            .iter()
            .zip(&other.elems)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Scalar, const DIM: usize> Index<usize> for Vector<T, DIM> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        &self.elems[pos]
    }
}

impl<T: Scalar, const DIM: usize> IndexMut<usize> for Vector<T, DIM> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.elems[pos]
    }
}

impl<T: Scalar, const DIM: usize> Add for Vector<T, DIM> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Scalar, const DIM: usize> Sub for Vector<T, DIM> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar, const DIM: usize> Mul<T> for Vector<T, DIM> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.map(|e| e * scalar)
    }
}

/// Divides every component by `scalar`. A zero divisor yields ±Inf/NaN for
/// floats and a saturated sentinel for integers; see [`Scalar::guarded_div`].
impl<T: Scalar, const DIM: usize> Div<T> for Vector<T, DIM> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        self.map(|e| e.guarded_div(scalar))
    }
}

impl<T: Scalar + Neg<Output = T>, const DIM: usize> Neg for Vector<T, DIM> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<T: Scalar, const DIM: usize> AddAssign for Vector<T, DIM> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.elems.iter_mut().zip(rhs.elems) {
            *lhs += rhs;
        }
    }
}

impl<T: Scalar, const DIM: usize> SubAssign for Vector<T, DIM> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.elems.iter_mut().zip(rhs.elems) {
            *lhs -= rhs;
        }
    }
}

impl<T: Scalar, const DIM: usize> MulAssign<T> for Vector<T, DIM> {
    fn mul_assign(&mut self, scalar: T) {
        for elem in &mut self.elems {
            *elem *= scalar;
        }
    }
}

impl<T: Scalar, const DIM: usize> DivAssign<T> for Vector<T, DIM> {
    fn div_assign(&mut self, scalar: T) {
        for elem in &mut self.elems {
            *elem = elem.guarded_div(scalar);
        }
    }
}

// scalar * vector for every primitive element type
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const DIM: usize> Mul<Vector<$t, DIM>> for $t {
                type Output = Vector<$t, DIM>;

                fn mul(self, rhs: Vector<$t, DIM>) -> Vector<$t, DIM> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Conversions between Vector<T, DIM> and arrays

impl<T: Scalar, const DIM: usize> From<[T; DIM]> for Vector<T, DIM> {
    fn from(array: [T; DIM]) -> Self {
        Self::new(array)
    }
}

impl<T: Scalar, const DIM: usize> From<&[T; DIM]> for Vector<T, DIM> {
    fn from(array: &[T; DIM]) -> Self {
        Self::new(*array)
    }
}

impl<T: Scalar, const DIM: usize> From<Vector<T, DIM>> for [T; DIM] {
    fn from(v: Vector<T, DIM>) -> Self {
        v.elems
    }
}

impl<T: Scalar, const DIM: usize> TryFrom<&[T]> for Vector<T, DIM> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> Result<Self> {
        let elems = <[T; DIM]>::try_from(slice).map_err(|_| NumericsError::LengthMismatch {
            expected: DIM,
            found: slice.len(),
        })?;
        Ok(Self::new(elems))
    }
}

// Conversions between Vector<T, DIM> and tuples

macro_rules! impl_tuple_conversions {
    (@ty $name:ident $t:ident) => { $t };
    ($dim:literal => ($($idx:tt : $name:ident),+)) => {
        impl<T: Scalar> From<($(impl_tuple_conversions!(@ty $name T),)+)> for Vector<T, $dim> {
            fn from(tuple: ($(impl_tuple_conversions!(@ty $name T),)+)) -> Self {
                Self::new([$(tuple.$idx),+])
            }
        }

        impl<T: Scalar> From<Vector<T, $dim>> for ($(impl_tuple_conversions!(@ty $name T),)+) {
            fn from(v: Vector<T, $dim>) -> Self {
                let [$($name),+] = v.elems;
                ($($name,)+)
            }
        }
    };
}

impl_tuple_conversions!(2 => (0: x, 1: y));
impl_tuple_conversions!(3 => (0: x, 1: y, 2: z));
impl_tuple_conversions!(4 => (0: x, 1: y, 2: z, 3: w));

impl<T: Scalar, const DIM: usize> IntoIterator for Vector<T, DIM> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, DIM>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, T: Scalar, const DIM: usize> IntoIterator for &'a Vector<T, DIM> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

// Serialized as a fixed-length tuple so any dimension round-trips.
impl<T, const DIM: usize> Serialize for Vector<T, DIM>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(DIM)?;
        for elem in &self.elems {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

impl<'de, T, const DIM: usize> Deserialize<'de> for Vector<T, DIM>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ComponentVisitor<T, const DIM: usize>(PhantomData<T>);

        impl<'de, T, const DIM: usize> Visitor<'de> for ComponentVisitor<T, DIM>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = [T; DIM];

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {} vector components", DIM)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut elems = [T::ZERO; DIM];
                for (i, elem) in elems.iter_mut().enumerate() {
                    *elem = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(elems)
            }
        }

        deserializer
            .deserialize_tuple(DIM, ComponentVisitor::<T, DIM>(PhantomData))
            .map(Self::new)
    }
}
