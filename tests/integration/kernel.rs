use proptest::prelude::*;
use tessera::numerics::kernel::{self, DEFAULT_DOUBLE_THRESHOLD, DEFAULT_FLOAT_THRESHOLD};
use tessera::{clamp, degrees_to_radians, lzcnt, lzcnt_ce, radians_to_degrees, sqrt, sqrt_ce};

#[test]
fn test_sqrt_of_four_on_both_paths() {
    println!("=== Square Root Paths Test ===");

    assert!((sqrt_ce(4.0_f32, DEFAULT_FLOAT_THRESHOLD) - 2.0).abs() <= DEFAULT_FLOAT_THRESHOLD);
    assert!((sqrt(4.0_f32) - 2.0).abs() <= DEFAULT_FLOAT_THRESHOLD);
    assert!((sqrt_ce(4.0_f64, DEFAULT_DOUBLE_THRESHOLD) - 2.0).abs() <= DEFAULT_DOUBLE_THRESHOLD);
    assert!((sqrt(4.0_f64) - 2.0).abs() <= DEFAULT_DOUBLE_THRESHOLD);

    println!("Square root paths: OK");
}

#[test]
fn test_sqrt_of_negative_is_nan() {
    assert!(sqrt(-1.0_f64).is_nan());
    assert!(sqrt_ce(-1.0_f64, DEFAULT_DOUBLE_THRESHOLD).is_nan());
    assert!(sqrt_ce(-1.0_f32, DEFAULT_FLOAT_THRESHOLD).is_nan());
    assert!(kernel::try_sqrt(-1.0_f64).is_err());
}

proptest! {
    #[test]
    fn newton_sqrt_tracks_native(x in 1.0e-6_f64..1.0e12) {
        let expected = x.sqrt();
        let actual = sqrt_ce(x, 1.0e-12);
        prop_assert!((actual - expected).abs() <= 1.0e-9 * expected.max(1.0));
    }

    #[test]
    fn newton_sqrt_tracks_native_f32(x in 1.0e-2_f32..1.0e6) {
        let expected = x.sqrt();
        let actual = sqrt_ce(x, 1.0e-6);
        prop_assert!((actual - expected).abs() <= 1.0e-5 * expected.max(1.0));
    }

    #[test]
    fn lzcnt_paths_agree(x in any::<u32>()) {
        prop_assert_eq!(lzcnt_ce(x), x.leading_zeros());
        prop_assert_eq!(lzcnt(x), lzcnt_ce(x));
    }

    #[test]
    fn clamp_stays_in_bounds(x in -1.0e6_f64..1.0e6, lo in -100.0_f64..0.0, hi in 0.0_f64..100.0) {
        let c = clamp(x, lo, hi);
        prop_assert!(c >= lo && c <= hi);
        if x >= lo && x <= hi {
            prop_assert_eq!(c, x);
        }
    }

    #[test]
    fn angle_conversions_round_trip(deg in -720.0_f64..720.0) {
        let back = radians_to_degrees(degrees_to_radians(deg));
        prop_assert!((back - deg).abs() < 1.0e-9);
    }
}
