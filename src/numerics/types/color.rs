// src/numerics/types/color.rs
// RGB and RGBA colors backed by a single Vector.

use core::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::traits::Scalar;
use super::vector::Vector;

/// Color3 names the three components of a `Vector<T, 3>` as r, g, b.
///
/// The channel accessors index the wrapped vector, so `color.r()` and
/// `color[0]` always agree. Vector algebra is reachable through `Deref`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Color3<T: Scalar>(Vector<T, 3>);

pub type Color3f = Color3<f32>;
pub type Color3d = Color3<f64>;

impl<T: Scalar> Color3<T> {
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self(Vector::new([r, g, b]))
    }

    pub fn r(&self) -> T {
        self.0[0]
    }

    pub fn g(&self) -> T {
        self.0[1]
    }

    pub fn b(&self) -> T {
        self.0[2]
    }

    pub fn set_r(&mut self, value: T) {
        self.0[0] = value;
    }

    pub fn set_g(&mut self, value: T) {
        self.0[1] = value;
    }

    pub fn set_b(&mut self, value: T) {
        self.0[2] = value;
    }

    pub fn into_vector(self) -> Vector<T, 3> {
        self.0
    }
}

/// Color4 is the RGBA counterpart of [`Color3`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Color4<T: Scalar>(Vector<T, 4>);

pub type Color4f = Color4<f32>;
pub type Color4d = Color4<f64>;

impl<T: Scalar> Color4<T> {
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self(Vector::new([r, g, b, a]))
    }

    pub fn r(&self) -> T {
        self.0[0]
    }

    pub fn g(&self) -> T {
        self.0[1]
    }

    pub fn b(&self) -> T {
        self.0[2]
    }

    pub fn a(&self) -> T {
        self.0[3]
    }

    pub fn set_r(&mut self, value: T) {
        self.0[0] = value;
    }

    pub fn set_g(&mut self, value: T) {
        self.0[1] = value;
    }

    pub fn set_b(&mut self, value: T) {
        self.0[2] = value;
    }

    pub fn set_a(&mut self, value: T) {
        self.0[3] = value;
    }

    /// The same color without its alpha channel.
    pub fn rgb(&self) -> Color3<T> {
        Color3::new(self.r(), self.g(), self.b())
    }

    pub fn into_vector(self) -> Vector<T, 4> {
        self.0
    }
}

macro_rules! impl_color_vector_conversions {
    ($color:ident, $dim:literal) => {
        impl<T: Scalar> From<Vector<T, $dim>> for $color<T> {
            fn from(vec: Vector<T, $dim>) -> Self {
                Self(vec)
            }
        }

        impl<T: Scalar> From<$color<T>> for Vector<T, $dim> {
            fn from(color: $color<T>) -> Self {
                color.0
            }
        }

        impl<T: Scalar> Deref for $color<T> {
            type Target = Vector<T, $dim>;

            fn deref(&self) -> &Vector<T, $dim> {
                &self.0
            }
        }

        impl<T: Scalar> DerefMut for $color<T> {
            fn deref_mut(&mut self) -> &mut Vector<T, $dim> {
                &mut self.0
            }
        }
    };
}

impl_color_vector_conversions!(Color3, 3);
impl_color_vector_conversions!(Color4, 4);
