// tests/integration/mod.rs
// Property and scenario tests grouped by area.

mod geometry;
mod kernel;
mod matrix_algebra;
mod vector_algebra;
