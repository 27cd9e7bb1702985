//! Walks through the vector, matrix and geometry API.
//!
//! Run with `RUST_LOG=trace cargo run --example geometry_tour` to see the
//! degenerate-input diagnostics.

use tessera::{
    lines_intersect, line_intersection, midpoint, vector, Color3f, KernelConfig, Matrix3x3,
    Point2d, Rect, Vector,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> tessera::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Vectors
    let v = vector![3.0_f64, 4.0, 0.0];
    let w = vector![f64; 0, 0, 2];
    info!(length = v.length(), "v = {:?}", v.as_array());
    info!(cross = ?v.cross(&w), dot = v.dot(&w), "v against w");
    info!(unit = ?v.try_unit_vector()?, "normalized v");

    // Matrices
    let rotate = Matrix3x3::<f64>::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    let rotated = rotate * v;
    info!(det = rotate.determinant(), rotated = ?rotated, "quarter turn about z");
    info!(back = ?(rotate.transpose() * rotated), "inverse rotation via transpose");

    // Segments
    let (a1, a2): (Point2d, Point2d) = (Vector::new([0.0, 0.0]), Vector::new([4.0, 4.0]));
    let (b1, b2): (Point2d, Point2d) = (Vector::new([0.0, 4.0]), Vector::new([4.0, 0.0]));
    info!(
        crosses = lines_intersect(&a1, &a2, &b1, &b2),
        at = ?line_intersection(&a1, &a2, &b1, &b2),
        midpoint = ?midpoint(&a1, &a2),
        "diagonals of a square"
    );

    let (c1, c2): (Point2d, Point2d) = (Vector::new([0.0, 1.0]), Vector::new([4.0, 5.0]));
    info!(crosses = lines_intersect(&a1, &a2, &c1, &c2), "parallel diagonal");

    // Collaborators
    let mut tint = Color3f::new(0.2, 0.4, 0.6);
    tint.set_b(1.0);
    info!(r = tint.r(), g = tint.g(), b = tint.b(), "tint");

    let viewport = Rect::new(0, 0, 1920, 1080);
    info!(width = viewport.width(), height = viewport.height(), "viewport");

    // Kernel tuning
    let config = KernelConfig::from_json(r#"{ "max_newton_iterations": 12 }"#)?;
    info!(root = config.sqrt_f64(2.0), "sqrt(2) with {} iterations max", config.max_newton_iterations);

    Ok(())
}
