use proptest::prelude::*;
use tessera::{cross, dot, unit_vector, vector, Vector};

const RANGE_F64: core::ops::Range<f64> = -1.0e3..1.0e3;
const RANGE_F32: core::ops::Range<f32> = -100.0..100.0;

#[test]
fn test_cross_of_basis_vectors() {
    let x = vector![1, 0, 0];
    let y = vector![0, 1, 0];
    assert_eq!(cross(&x, &y), vector![0, 0, 1]);
    assert_eq!(cross(&y, &x), vector![0, 0, -1]);
}

#[test]
fn test_zero_vector_normalization_is_nan() {
    println!("=== Zero Vector Normalization Test ===");

    let u = unit_vector(&Vector::<f32, 3>::zero());
    assert!(u.iter().all(|c| c.is_nan()));
    assert!(Vector::<f64, 2>::zero().try_unit_vector().is_err());

    println!("Zero vector normalization: OK");
}

proptest! {
    #[test]
    fn add_then_sub_restores_f64(a in RANGE_F64, b in RANGE_F64, c in RANGE_F64,
        d in RANGE_F64, e in RANGE_F64, f in RANGE_F64)
    {
        let v = Vector::new([a, b, c]);
        let w = Vector::new([d, e, f]);
        prop_assert_eq!((v + w) - w, v);
    }

    #[test]
    fn add_then_sub_restores_f32(a in RANGE_F32, b in RANGE_F32, c in RANGE_F32, d in RANGE_F32) {
        let v = Vector::new([a, b]);
        let w = Vector::new([c, d]);
        prop_assert_eq!((v + w) - w, v);
    }

    #[test]
    fn dot_with_self_is_length_squared(a in -1000_i32..1000, b in -1000_i32..1000, c in -1000_i32..1000) {
        let v = Vector::new([a, b, c]);
        prop_assert_eq!(dot(&v, &v), v.length_squared());
        prop_assert_eq!(v.length_squared(), a * a + b * b + c * c);
    }

    #[test]
    fn float_dot_with_self_is_length_squared(a in RANGE_F64, b in RANGE_F64, c in RANGE_F64, d in RANGE_F64) {
        let v = Vector::new([a, b, c, d]);
        let squared = v.length_squared();
        prop_assert!((dot(&v, &v) - squared).abs() <= 1e-4);

        let length = v.length();
        prop_assert!((length * length - squared).abs() <= 1e-9 * squared.max(1.0));
    }

    #[test]
    fn float_dot_with_self_is_length_squared_f32(a in RANGE_F32, b in RANGE_F32, c in RANGE_F32) {
        let v = Vector::new([a, b, c]);
        prop_assert!((dot(&v, &v) - v.length_squared()).abs() <= 1e-4);
        prop_assert!(v.length_squared() >= 0.0);
    }

    #[test]
    fn unit_vector_has_unit_length(a in -100.0_f64..100.0, b in -100.0_f64..100.0, c in -100.0_f64..100.0) {
        let v = Vector::new([a, b, c]);
        prop_assume!(v.length() > 1e-3);

        let u = v.unit_vector();
        prop_assert!((u.length() - 1.0).abs() < 1e-9);
        prop_assert!(dot(&u, &v) > 0.0);
    }

    #[test]
    fn integer_unit_vector_promotes(a in -50_i32..50, b in -50_i32..50) {
        prop_assume!(a != 0 || b != 0);
        let u = Vector::new([a, b]).unit_vector();
        prop_assert!((u.length() - 1.0_f32).abs() < 1e-5);
    }

    #[test]
    fn cross_is_orthogonal(a in -1000_i64..1000, b in -1000_i64..1000, c in -1000_i64..1000,
        d in -1000_i64..1000, e in -1000_i64..1000, f in -1000_i64..1000)
    {
        let v = Vector::new([a, b, c]);
        let w = Vector::new([d, e, f]);
        let n = v.cross(&w);
        prop_assert_eq!(n.dot(&v), 0);
        prop_assert_eq!(n.dot(&w), 0);
    }
}
