// src/numerics/geometry.rs
//! Planar geometry helpers: distances and segment intersection tests.
//!
//! The intersection routines work on parameters of the two segments,
//! `a1 + t * (a2 - a1)` and `b1 + s * (b2 - b1)`, solved with the 2-D cross
//! product. Parallel, collinear and zero-length inputs never reach a
//! division; they are reported as "no intersection".

use tracing::trace;

use crate::numerics::kernel;
use crate::numerics::types::point::Point2;
use crate::numerics::types::traits::FloatingPoint;

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance<T: FloatingPoint>(x1: T, y1: T, x2: T, y2: T) -> T {
    let dx = x1 - x2;
    let dy = y1 - y2;
    kernel::sqrt(dx * dx + dy * dy)
}

pub fn point_distance<T: FloatingPoint>(p1: &Point2<T>, p2: &Point2<T>) -> T {
    distance(p1[0], p1[1], p2[0], p2[1])
}

#[inline]
fn cross<T: FloatingPoint>(x1: T, y1: T, x2: T, y2: T) -> T {
    x1 * y2 - y1 * x2
}

// Solved parameters `(t, s)` of the crossing point along `a` and `b`, or
// `None` for degenerate input.
fn crossing_parameters<T: FloatingPoint>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> Option<(T, T)> {
    let (lax, lay) = (a2[0] - a1[0], a2[1] - a1[1]);
    let (lbx, lby) = (b2[0] - b1[0], b2[1] - b1[1]);

    let denom = cross(lax, lay, lbx, lby);
    if denom == T::ZERO || !denom.is_finite() {
        trace!(denom = denom.to_f64(), "segments are parallel or degenerate");
        return None;
    }

    let (ox, oy) = (b1[0] - a1[0], b1[1] - a1[1]);
    let t = cross(ox, oy, lbx, lby) / denom;
    let s = cross(ox, oy, lax, lay) / denom;
    if !t.is_finite() || !s.is_finite() {
        trace!(t = t.to_f64(), s = s.to_f64(), "non-finite intersection parameter");
        return None;
    }
    Some((t, s))
}

#[inline]
fn in_unit_interval<T: FloatingPoint>(value: T) -> bool {
    value >= T::ZERO && value <= T::ONE
}

/// Whether the line through `a1` and `a2` crosses segment `b1` to `b2`.
///
/// Only the parameter along `b` is bounded; the `a` line extends past its
/// endpoints. Use [`segments_intersect`] to bound both.
pub fn lines_intersect<T: FloatingPoint>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> bool {
    crossing_parameters(a1, a2, b1, b2).is_some_and(|(_, s)| in_unit_interval(s))
}

/// Whether the closed segments `a1` to `a2` and `b1` to `b2` share a point.
pub fn segments_intersect<T: FloatingPoint>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> bool {
    crossing_parameters(a1, a2, b1, b2)
        .is_some_and(|(t, s)| in_unit_interval(t) && in_unit_interval(s))
}

/// Point where the line through `a1`, `a2` crosses segment `b1` to `b2`,
/// under the same conditions as [`lines_intersect`].
pub fn line_intersection<T: FloatingPoint>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> Option<Point2<T>> {
    let (_, s) = crossing_parameters(a1, a2, b1, b2)?;
    if !in_unit_interval(s) {
        return None;
    }
    Some(*b1 + (*b2 - *b1) * s)
}
