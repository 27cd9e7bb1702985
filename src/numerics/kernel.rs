// src/numerics/kernel.rs
//! Bit-level scalar primitives shared by the vector, matrix and geometry code.
//!
//! The `*_ce` functions are `const fn` and can be evaluated in `const` items.
//! Rust offers no way to branch on constant evaluation, so the run-time entry
//! points ([`sqrt`], [`lzcnt`]) are separate functions backed by the platform
//! instruction. Both paths agree within the requested threshold.

use tracing::debug;

use crate::error::{NumericsError, Result};
use crate::numerics::types::traits::FloatingPoint;

pub const DEFAULT_FLOAT_THRESHOLD: f32 = 0.0001;
pub const DEFAULT_DOUBLE_THRESHOLD: f64 = 0.000001;

/// Upper bound on Newton refinements before the current estimate is returned.
pub const MAX_NEWTON_ITERATIONS: u32 = 64;

const F32_SIGN_MASK: u32 = 0x7FFF_FFFF;
const F32_MANTISSA_MASK: u32 = 0x007F_FFFF;
const F64_SIGN_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;
const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Absolute value by clearing the IEEE-754 sign bit.
#[inline]
pub const fn abs_f32(val: f32) -> f32 {
    f32::from_bits(val.to_bits() & F32_SIGN_MASK)
}

/// Absolute value by clearing the IEEE-754 sign bit.
#[inline]
pub const fn abs_f64(val: f64) -> f64 {
    f64::from_bits(val.to_bits() & F64_SIGN_MASK)
}

#[inline]
pub fn abs<T: FloatingPoint>(val: T) -> T {
    val.abs()
}

/// Square root by Newton iteration from a bit-manipulated seed.
///
/// Returns NaN for negative or NaN input. `0` and `+inf` are returned as is.
pub const fn sqrt_ce_f32(val: f32, threshold: f32) -> f32 {
    sqrt_ce_f32_bounded(val, threshold, MAX_NEWTON_ITERATIONS)
}

/// [`sqrt_ce_f32`] with an explicit cap on the number of refinements.
pub const fn sqrt_ce_f32_bounded(val: f32, threshold: f32, max_iterations: u32) -> f32 {
    if val.is_nan() || val < 0.0 {
        return f32::NAN;
    }
    if val == 0.0 || val == f32::INFINITY {
        return val;
    }

    // Halve the biased exponent and re-bias it, then halve the mantissa
    // under a leading implicit bit.
    let bits = val.to_bits();
    let exponent = ((bits >> 23) >> 1) + 63;
    let mantissa = (1 << 22) | ((bits & F32_MANTISSA_MASK) >> 1);

    let mut current = f32::from_bits((exponent << 23) | mantissa);
    let mut iterations = 0;
    loop {
        let previous = val / current;
        current = 0.5 * (current + previous);
        iterations += 1;
        if abs_f32(current - previous) <= threshold || iterations >= max_iterations {
            break;
        }
    }
    current
}

/// Square root by Newton iteration from a bit-manipulated seed.
///
/// Returns NaN for negative or NaN input. `0` and `+inf` are returned as is.
pub const fn sqrt_ce_f64(val: f64, threshold: f64) -> f64 {
    sqrt_ce_f64_bounded(val, threshold, MAX_NEWTON_ITERATIONS)
}

/// [`sqrt_ce_f64`] with an explicit cap on the number of refinements.
pub const fn sqrt_ce_f64_bounded(val: f64, threshold: f64, max_iterations: u32) -> f64 {
    if val.is_nan() || val < 0.0 {
        return f64::NAN;
    }
    if val == 0.0 || val == f64::INFINITY {
        return val;
    }

    let bits = val.to_bits();
    let exponent = ((bits >> 52) >> 1) + 511;
    let mantissa = (1 << 51) | ((bits & F64_MANTISSA_MASK) >> 1);

    let mut current = f64::from_bits((exponent << 52) | mantissa);
    let mut iterations = 0;
    loop {
        let previous = val / current;
        current = 0.5 * (current + previous);
        iterations += 1;
        if abs_f64(current - previous) <= threshold || iterations >= max_iterations {
            break;
        }
    }
    current
}

/// Run-time square root using the native instruction. NaN for negative input.
#[inline]
pub fn sqrt<T: FloatingPoint>(val: T) -> T {
    val.sqrt()
}

/// Generic entry to the Newton square root.
#[inline]
pub fn sqrt_ce<T: FloatingPoint>(val: T, threshold: T) -> T {
    val.sqrt_ce(threshold)
}

/// Square root that reports a domain error instead of returning NaN.
pub fn try_sqrt<T: FloatingPoint>(val: T) -> Result<T> {
    if !val.is_finite() {
        debug!(value = val.to_f64(), "rejected non-finite square root input");
        return Err(NumericsError::NonFinite { value: val.to_f64() });
    }
    if val < T::ZERO {
        debug!(value = val.to_f64(), "rejected negative square root input");
        return Err(NumericsError::NegativeSqrt { value: val.to_f64() });
    }
    Ok(val.sqrt())
}

/// Turns a NaN/Inf sentinel produced by the unchecked API into an error.
pub fn check_finite<T: FloatingPoint>(val: T) -> Result<T> {
    if val.is_finite() {
        Ok(val)
    } else {
        Err(NumericsError::NonFinite { value: val.to_f64() })
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[inline]
pub fn degrees_to_radians<T: FloatingPoint>(degrees: T) -> T {
    degrees * T::PI / T::from_f64(180.0)
}

#[inline]
pub fn radians_to_degrees<T: FloatingPoint>(radians: T) -> T {
    radians * T::from_f64(180.0) / T::PI
}

/// Leading zero count by a linear bit scan. `lzcnt_ce(0) == 32`.
pub const fn lzcnt_ce(val: u32) -> u32 {
    let mut val = val;
    let mut count = 0;
    while val != 0 {
        val >>= 1;
        count += 1;
    }
    32 - count
}

/// Leading zero count through the hardware count instruction.
#[inline]
pub const fn lzcnt(val: u32) -> u32 {
    val.leading_zeros()
}
