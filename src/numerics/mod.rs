// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod geometry;
pub mod kernel;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod rect;
    pub mod traits;
    pub mod vector;
}
