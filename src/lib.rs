//! Fixed-size linear algebra and scalar math kernels.
//!
//! Vectors and square matrices carry their dimension in the type, so
//! mismatched shapes are rejected at compile time. Degenerate numeric input
//! (negative square roots, zero-length normalization, parallel segments)
//! yields NaN or `false` from the plain operations; the `try_*` variants
//! return a [`NumericsError`] instead.
//!
//! ```
//! use tessera::{vector, Matrix3x3, Vector};
//!
//! let v = vector![1.0_f32, 2.0, 3.0];
//! let m = Matrix3x3::<f32>::identity() * 2.0;
//! assert_eq!(m * v, Vector::new([2.0, 4.0, 6.0]));
//! ```

pub mod config;
pub mod error;
pub mod numerics;

pub use config::KernelConfig;
pub use error::{NumericsError, Result};
pub use numerics::geometry::{distance, line_intersection, lines_intersect, point_distance, segments_intersect};
pub use numerics::kernel::{clamp, degrees_to_radians, lzcnt, lzcnt_ce, radians_to_degrees, sqrt, sqrt_ce, try_sqrt};
pub use numerics::types::color::{Color3, Color3d, Color3f, Color4, Color4d, Color4f};
pub use numerics::types::matrix::{Matrix, Matrix2x2, Matrix3x3, Matrix4x4};
pub use numerics::types::point::{midpoint, Point, Point2, Point2d, Point2f, Point3, Point3d, Point3f};
pub use numerics::types::point::{Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f, Vec4};
pub use numerics::types::rect::Rect;
pub use numerics::types::traits::{FloatingPoint, Integral, Scalar};
pub use numerics::types::vector::{cross, dot, unit_vector, Vector};

#[doc(hidden)]
pub use num_traits as __num_traits;
