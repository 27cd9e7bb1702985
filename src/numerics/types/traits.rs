// src/numerics/types/traits.rs
// Element traits shared by the vector and matrix types.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::numerics::kernel;

/// Scalar is implemented by every element type a `Vector` or `Matrix` can hold:
/// the primitive floating point and integer types.
///
/// We require Copy, PartialOrd and the basic arithmetic ops on Self, plus a
/// floating point `Real` type that lengths and normalisation promote into.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Floating point type used for lengths and unit vectors.
    type Real: FloatingPoint;

    fn to_real(self) -> Self::Real;

    /// Component comparison used by `Vector` equality.
    ///
    /// Integers compare exactly; floats are equal when they differ by at most
    /// [`FloatingPoint::EQUALITY_THRESHOLD`].
    fn approx_eq(self, other: Self) -> bool;

    /// Division that never panics. Floats follow IEEE-754 (±Inf or NaN for a
    /// zero divisor); integers saturate towards the sign of the dividend.
    fn guarded_div(self, rhs: Self) -> Self;

    /// Mean of two values without intermediate overflow. Integers truncate
    /// towards zero.
    fn average(self, other: Self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// FloatingPoint narrows `Scalar` to `f32` and `f64`.
pub trait FloatingPoint: Scalar<Real = Self> + Neg<Output = Self> {
    /// Newton convergence threshold used by the bit-level square root.
    const DEFAULT_THRESHOLD: Self;
    /// Per-component tolerance used by vector equality.
    const EQUALITY_THRESHOLD: Self;
    const PI: Self;
    const NAN: Self;

    /// Square root through the platform instruction.
    fn sqrt(self) -> Self;

    /// Square root through the bit-seeded Newton iteration.
    fn sqrt_ce(self, threshold: Self) -> Self;

    /// Absolute value by clearing the sign bit.
    fn abs(self) -> Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

/// Marker for the integer element types.
pub trait Integral: Scalar + Eq + Ord {}

macro_rules! impl_float_scalar {
    ($t:ident, $threshold:expr, $sqrt_ce:path, $abs:path) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            type Real = $t;

            #[inline]
            fn to_real(self) -> Self::Real {
                self
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                $abs(self - other) <= <$t as FloatingPoint>::EQUALITY_THRESHOLD
            }

            #[inline]
            fn guarded_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn average(self, other: Self) -> Self {
                self * 0.5 + other * 0.5
            }
        }

        impl FloatingPoint for $t {
            const DEFAULT_THRESHOLD: Self = $threshold;
            const EQUALITY_THRESHOLD: Self = 0.0001;
            const PI: Self = core::$t::consts::PI;
            const NAN: Self = $t::NAN;

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn sqrt_ce(self, threshold: Self) -> Self {
                $sqrt_ce(self, threshold)
            }

            #[inline]
            fn abs(self) -> Self {
                $abs(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_scalar!(f32, kernel::DEFAULT_FLOAT_THRESHOLD, kernel::sqrt_ce_f32, kernel::abs_f32);
impl_float_scalar!(f64, kernel::DEFAULT_DOUBLE_THRESHOLD, kernel::sqrt_ce_f64, kernel::abs_f64);

// Signed and unsigned integers only differ in their zero-divisor sentinel.
macro_rules! impl_int_scalar {
    (signed: $($t:ty => $real:ty),* $(,)?) => {
        $(
            impl_int_scalar!(@common $t, $real, |lhs: $t| {
                if lhs > 0 {
                    <$t>::MAX
                } else if lhs < 0 {
                    <$t>::MIN
                } else {
                    0
                }
            });
        )*
    };
    (unsigned: $($t:ty => $real:ty),* $(,)?) => {
        $(
            impl_int_scalar!(@common $t, $real, |lhs: $t| {
                if lhs > 0 { <$t>::MAX } else { 0 }
            });
        )*
    };
    (@common $t:ty, $real:ty, $sentinel:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            type Real = $real;

            #[inline]
            fn to_real(self) -> Self::Real {
                self as $real
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn guarded_div(self, rhs: Self) -> Self {
                match self.checked_div(rhs) {
                    Some(quotient) => quotient,
                    None if rhs == 0 => ($sentinel)(self),
                    // MIN / -1 overflows to one past MAX.
                    None => <$t>::MAX,
                }
            }

            // Every integer type here widens losslessly into i128.
            #[inline]
            fn average(self, other: Self) -> Self {
                ((self as i128 + other as i128) / 2) as $t
            }
        }

        impl Integral for $t {}
    };
}

impl_int_scalar!(signed: i8 => f32, i16 => f32, i32 => f32, i64 => f64, isize => f64);
impl_int_scalar!(unsigned: u8 => f32, u16 => f32, u32 => f32, u64 => f64, usize => f64);
