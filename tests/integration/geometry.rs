use proptest::prelude::*;
use tessera::{distance, line_intersection, lines_intersect, midpoint, segments_intersect, Point2, Point2d};

fn p(x: f64, y: f64) -> Point2d {
    Point2::new([x, y])
}

#[test]
fn test_segments_crossing_at_midpoints() {
    println!("=== Midpoint Crossing Test ===");

    let (a1, a2) = (p(-3.0, 1.0), p(5.0, 7.0));
    let (b1, b2) = (p(-3.0, 7.0), p(5.0, 1.0));
    let centre = midpoint(&a1, &a2);
    assert_eq!(centre, midpoint(&b1, &b2));

    assert!(lines_intersect(&a1, &a2, &b1, &b2));
    assert!(segments_intersect(&a1, &a2, &b1, &b2));
    assert_eq!(line_intersection(&a1, &a2, &b1, &b2), Some(centre));

    println!("Midpoint crossing: OK");
}

#[test]
fn test_parallel_segments_report_no_intersection() {
    println!("=== Parallel Segments Test ===");

    let (a1, a2) = (p(0.0, 0.0), p(4.0, 2.0));
    let (b1, b2) = (p(0.0, 3.0), p(4.0, 5.0));

    assert!(!lines_intersect(&a1, &a2, &b1, &b2));
    assert!(!segments_intersect(&a1, &a2, &b1, &b2));
    assert!(line_intersection(&a1, &a2, &b1, &b2).is_none());

    println!("Parallel segments: OK");
}

#[test]
fn test_distance_matches_points() {
    let d = distance(1.0_f32, 2.0, 4.0, 6.0);
    assert!((d - 5.0).abs() < 1e-6);
}

proptest! {
    #[test]
    fn segments_through_a_shared_centre_cross(cx in -100.0_f64..100.0, cy in -100.0_f64..100.0,
        ux in -10.0_f64..10.0, uy in -10.0_f64..10.0, vx in -10.0_f64..10.0, vy in -10.0_f64..10.0)
    {
        prop_assume!((ux * vy - uy * vx).abs() > 1e-2);

        let centre = p(cx, cy);
        let (a1, a2) = (p(cx - ux, cy - uy), p(cx + ux, cy + uy));
        let (b1, b2) = (p(cx - vx, cy - vy), p(cx + vx, cy + vy));

        prop_assert!(lines_intersect(&a1, &a2, &b1, &b2));
        prop_assert!(segments_intersect(&a1, &a2, &b1, &b2));
        let hit = line_intersection(&a1, &a2, &b1, &b2);
        prop_assert_eq!(hit, Some(centre));
    }

    #[test]
    fn offset_parallel_segments_never_cross(px in -50_i32..50, py in -50_i32..50,
        dx in -20_i32..20, dy in -20_i32..20, nx in -20_i32..20, ny in -20_i32..20)
    {
        prop_assume!(dx != 0 || dy != 0);
        prop_assume!(nx * dy - ny * dx != 0);

        let (px, py, dx, dy, nx, ny) =
            (px as f64, py as f64, dx as f64, dy as f64, nx as f64, ny as f64);
        let (a1, a2) = (p(px, py), p(px + dx, py + dy));
        let (b1, b2) = (p(px + nx, py + ny), p(px + nx + dx, py + ny + dy));

        prop_assert!(!lines_intersect(&a1, &a2, &b1, &b2));
        prop_assert!(!segments_intersect(&a1, &a2, &b1, &b2));
    }
}
