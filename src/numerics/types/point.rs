// src/numerics/types/point.rs
// Point aliases for Vector, used for positions rather than displacements.

use super::traits::Scalar;
use super::vector::Vector;

/// Point is an alias to Vector to represent positions in space.
///
/// The alias keeps generic template parameterization.
pub type Point<T, const DIM: usize> = Vector<T, DIM>;
pub type Point2<T> = Vector<T, 2>;
pub type Point3<T> = Vector<T, 3>;
pub type Point2f = Point2<f32>;
pub type Point2d = Point2<f64>;
pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

/// Component-wise average of two points, over every dimension.
///
/// Integer coordinates truncate towards zero and never overflow, even when
/// both endpoints sit near the limits of the element type.
pub fn midpoint<T: Scalar, const DIM: usize>(p1: &Point<T, DIM>, p2: &Point<T, DIM>) -> Point<T, DIM> {
    let mut mid = *p1;
    for (m, &b) in mid.iter_mut().zip(p2) {
        *m = m.average(b);
    }
    mid
}
